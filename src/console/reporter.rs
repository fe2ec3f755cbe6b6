use std::io::Write;

use colored::Colorize;

use super::render_table;
use crate::domain::{Action, TableName};

/// Console side of a run: what is about to be touched and what was done.
pub trait Reporter {
    /// Announces the tables of one group or rule, e.g. "Cache table(s):".
    fn heading(&mut self, label: &str);

    fn render(&mut self, rows: &[Vec<String>]);

    fn applied(&mut self, action: Action, table: &TableName);

    fn skipped(&mut self, label: &str);
}

/// Writes to any sink, stdout in the binary.
pub struct TerminalReporter<W> {
    out: W,
}

impl TerminalReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) {
        // console output is best effort, a closed stdout must not abort a half-done run
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn heading(&mut self, label: &str) {
        self.write(&format!("{} table(s):\n", label.green()));
    }

    fn render(&mut self, rows: &[Vec<String>]) {
        self.write(&render_table(rows));
    }

    fn applied(&mut self, action: Action, table: &TableName) {
        self.write(&format!("{} {}\n", action, table.as_ref().green()));
    }

    fn skipped(&mut self, label: &str) {
        self.write(&format!("Skipped {}\n", label.yellow()));
    }
}
