//! Terminal UI writing to stdout.

use console::Term;
use std::io::Write;

use crate::checks::CheckOutcome;

use super::{should_use_colors, RackTheme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: RackTheme,
    line_open: bool,
}

impl TerminalUI {
    /// Create a terminal UI, colored if stdout is a TTY and NO_COLOR is unset.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            RackTheme::new()
        } else {
            RackTheme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: RackTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            line_open: false,
        }
    }

    fn close_line(&mut self) {
        if self.line_open {
            writeln!(self.term).ok();
            self.line_open = false;
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        self.close_line();
        writeln!(self.term, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        self.close_line();
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        self.close_line();
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn begin_check(&mut self, label: &str) {
        self.close_line();
        write!(self.term, "Testing {}... ", label).ok();
        self.term.flush().ok();
        self.line_open = true;
    }

    fn finish_check(&mut self, outcome: &CheckOutcome) {
        writeln!(self.term, "{}", self.theme.format_outcome(outcome)).ok();
        self.line_open = false;
        if let Some(hint) = outcome.hint() {
            writeln!(self.term, "{}", self.theme.format_hint(hint)).ok();
        }
    }
}
