//! Console Output Helpers
//!
//! Styled status lines for CLI commands. Warnings and errors go to stderr:
//! the generated document may be streaming to stdout.

use console::style;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        eprintln!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        eprintln!("{} {}", style("⚠").yellow(), message);
    }

    pub fn info(&self, message: &str) {
        eprintln!("{} {}", style("ℹ").blue(), message);
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
