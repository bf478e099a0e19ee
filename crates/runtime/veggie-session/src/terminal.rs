//! Guest terminal
//!
//! Keeps the scroll-back for one login and decides which lines reach the
//! interpreter. `exit` and `clear` are handled here, never by the interpreter.

use crate::gate::Session;
use chrono::{DateTime, Utc};
use veggie_core::PRODUCT;
use veggie_osint::Interpreter;

pub const ACCESS_DENIED: &str = "ACCESS DENIED: Terminal locked by administrator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Input,
    Output,
}

#[derive(Debug, Clone)]
pub struct ScrollbackEntry {
    pub kind: EntryKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// What happened to a submitted line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Blank line, nothing recorded
    Ignored,
    /// Guest input while the site is locked
    Denied(String),
    /// Interpreter output, also appended to scroll-back
    Output(String),
    /// Scroll-back was emptied
    Cleared,
    /// User asked to leave
    Logout,
}

pub struct TerminalSession {
    session: Session,
    scrollback: Vec<ScrollbackEntry>,
}

impl TerminalSession {
    pub fn new(session: Session) -> Self {
        let mut terminal = Self {
            session,
            scrollback: Vec::new(),
        };
        let welcome = terminal.welcome();
        terminal.push(EntryKind::Output, welcome);
        terminal
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn prompt(&self) -> String {
        format!("{} ", self.session.identity.prompt())
    }

    pub fn scrollback(&self) -> &[ScrollbackEntry] {
        &self.scrollback
    }

    pub fn welcome(&self) -> String {
        format!(
            "{} - OSINT Intelligence Terminal\nAuthenticated as: {}\nSession ID: {}\nType 'help' for available commands or 'exit' to logout",
            PRODUCT,
            self.session.identity.display_name,
            self.session.login_time.to_rfc3339(),
        )
    }

    /// Handle one line of input. `locked` is the gate's current lockout state.
    pub async fn submit(
        &mut self,
        input: &str,
        locked: bool,
        interpreter: &Interpreter,
    ) -> Submission {
        let command = input.trim();
        if command.is_empty() {
            return Submission::Ignored;
        }

        if locked && !self.session.identity.role.is_admin() {
            self.push(EntryKind::Output, ACCESS_DENIED.to_string());
            return Submission::Denied(ACCESS_DENIED.to_string());
        }

        let echo = format!("{} {}", self.session.identity.prompt(), command);
        self.push(EntryKind::Input, echo);

        match command {
            "exit" => Submission::Logout,
            "clear" => {
                self.scrollback.clear();
                Submission::Cleared
            }
            _ => {
                let output = interpreter.execute(command, &self.session.identity).await;
                self.push(EntryKind::Output, output.clone());
                Submission::Output(output)
            }
        }
    }

    fn push(&mut self, kind: EntryKind, content: String) {
        self.scrollback.push(ScrollbackEntry {
            kind,
            content,
            timestamp: Utc::now(),
        });
    }
}
