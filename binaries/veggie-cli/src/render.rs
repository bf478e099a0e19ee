//! Green-screen output

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Color, Stylize};
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

const LIGHT_GREEN: Color = Color::Rgb {
    r: 134,
    g: 239,
    b: 172,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Normal,
    Alert,
}

fn tone(line: &str) -> Tone {
    if line.starts_with("Error: ")
        || line.starts_with("ACCESS DENIED")
        || line.starts_with("Access denied")
        || line.starts_with("Command not found")
        || line.ends_with(" FAILED")
    {
        Tone::Alert
    } else {
        Tone::Normal
    }
}

/// Report text; error lines in red
pub fn output(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for line in text.lines() {
        match tone(line) {
            Tone::Alert => writeln!(out, "{}", line.red())?,
            Tone::Normal => writeln!(out, "{}", line.green())?,
        }
    }
    out.flush()
}

pub fn error(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", text.red())?;
    out.flush()
}

/// Status lines, lighter than report output
pub fn info(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{}", text.with(LIGHT_GREEN))?;
    out.flush()
}

pub fn clear() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}
