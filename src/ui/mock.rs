//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and renders everything into
//! an in-memory transcript using the plain theme, so tests can assert on the
//! exact lines a user would see.

use crate::checks::CheckOutcome;

use super::{RackTheme, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug)]
pub struct MockUI {
    theme: RackTheme,
    lines: Vec<String>,
    open_line: Option<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    outcomes: Vec<(String, CheckOutcome)>,
    current_label: Option<String>,
}

impl Default for MockUI {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUI {
    /// Create an empty mock UI.
    pub fn new() -> Self {
        Self {
            theme: RackTheme::plain(),
            lines: Vec::new(),
            open_line: None,
            errors: Vec::new(),
            headers: Vec::new(),
            outcomes: Vec::new(),
            current_label: None,
        }
    }

    /// All completed output lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full transcript, newline-joined.
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }

    /// Get all captured error messages (without the `ERROR:` prefix).
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured banner titles.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Every finished check as (label, outcome), in order.
    pub fn outcomes(&self) -> &[(String, CheckOutcome)] {
        &self.outcomes
    }

    /// Check if any output line contains `text`.
    pub fn has_line(&self, text: &str) -> bool {
        self.lines.iter().any(|l| l.contains(text))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|e| e.contains(msg))
    }

    fn close_line(&mut self) {
        if let Some(line) = self.open_line.take() {
            self.lines.push(line.trim_end().to_string());
        }
    }

    fn push(&mut self, text: String) {
        self.close_line();
        self.lines.extend(text.lines().map(str::to_string));
        if text.is_empty() {
            self.lines.push(String::new());
        }
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        let line = self.theme.format_error(msg);
        self.push(line);
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        let banner = self.theme.format_header(title);
        self.push(banner);
    }

    fn begin_check(&mut self, label: &str) {
        self.close_line();
        self.current_label = Some(label.to_string());
        self.open_line = Some(format!("Testing {}... ", label));
    }

    fn finish_check(&mut self, outcome: &CheckOutcome) {
        let token = self.theme.format_outcome(outcome);
        let line = match self.open_line.take() {
            Some(open) => format!("{}{}", open, token),
            None => token,
        };
        self.lines.push(line);
        if let Some(hint) = outcome.hint() {
            let hint_line = self.theme.format_hint(hint);
            self.lines.push(hint_line);
        }
        let label = self.current_label.take().unwrap_or_default();
        self.outcomes.push((label, outcome.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_line_is_joined_with_outcome() {
        let mut ui = MockUI::new();
        ui.begin_check("config.yaml");
        ui.finish_check(&CheckOutcome::failed("not found"));
        assert_eq!(ui.lines(), ["Testing config.yaml... FAILED (not found)"]);
        assert_eq!(ui.outcomes()[0].0, "config.yaml");
    }

    #[test]
    fn hint_follows_outcome() {
        let mut ui = MockUI::new();
        ui.begin_check("SSH keys");
        ui.finish_check(&CheckOutcome::warning(
            "no SSH key found",
            Some("ssh-keygen -t rsa -b 4096"),
        ));
        assert_eq!(
            ui.lines(),
            [
                "Testing SSH keys... WARNING (no SSH key found)",
                "  Run: ssh-keygen -t rsa -b 4096",
            ]
        );
    }

    #[test]
    fn message_closes_open_line() {
        let mut ui = MockUI::new();
        ui.begin_check("temperature monitoring");
        ui.error("sensor bus offline");
        assert_eq!(
            ui.lines(),
            ["Testing temperature monitoring...", "ERROR: sensor bus offline"]
        );
        assert!(ui.has_error("sensor bus"));
    }

    #[test]
    fn blank_message_is_a_blank_line() {
        let mut ui = MockUI::new();
        ui.message("");
        assert_eq!(ui.lines(), [""]);
    }

    #[test]
    fn transcript_joins_lines_in_order() {
        let mut ui = MockUI::new();
        ui.begin_check("PyYAML");
        ui.finish_check(&CheckOutcome::ok());
        ui.message("");
        ui.message("Passed: 1/1");
        assert_eq!(ui.transcript(), "Testing PyYAML... OK\n\nPassed: 1/1");
    }

    #[test]
    fn header_records_title_and_rules() {
        let mut ui = MockUI::new();
        ui.show_header("Summary");
        assert_eq!(ui.headers(), ["Summary"]);
        assert_eq!(ui.lines().len(), 3);
    }
}
