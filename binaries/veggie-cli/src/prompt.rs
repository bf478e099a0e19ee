//! Line editors for the shell.
//!
//! Passwords go through their own editor so they never reach the command
//! history, and every typed character is drawn as `*`.

use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::borrow::Cow;

/// Draws the line as asterisks
pub struct MaskingHelper;

impl Highlighter for MaskingHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Completer for MaskingHelper {
    type Candidate = String;
}

impl Hinter for MaskingHelper {
    type Hint = String;
}

impl Validator for MaskingHelper {}

impl Helper for MaskingHelper {}

pub type SecretEditor = Editor<MaskingHelper, DefaultHistory>;

pub fn secret_editor() -> rustyline::Result<SecretEditor> {
    let mut editor = SecretEditor::new()?;
    editor.set_helper(Some(MaskingHelper));
    Ok(editor)
}

/// `None` on end of input; Ctrl-C yields an empty line.
pub fn read<H: Helper>(
    editor: &mut Editor<H, DefaultHistory>,
    prompt: &str,
) -> rustyline::Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
        Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e),
    }
}
