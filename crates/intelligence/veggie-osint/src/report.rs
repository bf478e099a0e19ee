//! Report layout
//!
//! Two shapes exist. Framed reports start and end with a blank line and
//! align field values in a fixed column. Compact reports have no framing
//! and use `Label: value`.

use std::fmt::Display;

/// Horizontal rule under every report title
pub const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

const DEFAULT_WIDTH: usize = 14;

#[derive(Debug, Clone)]
pub struct Report {
    title: String,
    width: usize,
    framed: bool,
    lines: Vec<String>,
}

impl Report {
    /// Framed report with values aligned at column 14
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: DEFAULT_WIDTH,
            framed: true,
            lines: Vec::new(),
        }
    }

    /// Unframed report, `Label: value` fields
    pub fn compact(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width: 0,
            framed: false,
            lines: Vec::new(),
        }
    }

    /// Column where field values start
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Add a labelled field. Multi-line values continue under the value column.
    pub fn field(mut self, label: &str, value: impl Display) -> Self {
        let value = value.to_string();
        let label = format!("{}:", label);
        let head = if self.width > label.len() {
            format!("{:<width$}", label, width = self.width)
        } else {
            format!("{} ", label)
        };
        let indent = " ".repeat(head.chars().count());

        let mut parts = value.split('\n');
        let first = parts.next().unwrap_or_default();
        self.lines.push(format!("{}{}", head, first));
        for rest in parts {
            self.lines.push(format!("{}{}", indent, rest));
        }
        self
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn render(&self) -> String {
        let body = self.lines.join("\n");
        if self.framed {
            format!("\n{}\n{}\n\n{}\n", self.title, RULE, body)
        } else {
            format!("{}\n{}\n\n{}", self.title, RULE, body)
        }
    }
}
