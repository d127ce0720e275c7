//! Visual theme and styling.

use console::Style;

use crate::checks::CheckOutcome;

/// Width of the `=` rules around banners.
pub const RULE_WIDTH: usize = 50;

/// rackcheck's visual theme.
#[derive(Debug, Clone)]
pub struct RackTheme {
    /// Style for OK tokens (green).
    pub ok: Style,
    /// Style for WARNING tokens (orange).
    pub warning: Style,
    /// Style for FAILED tokens and errors (red bold).
    pub error: Style,
    /// Style for remediation hints (dim).
    pub hint: Style,
    /// Style for banner titles (bold).
    pub header: Style,
    /// Style for banner rules (dim).
    pub border: Style,
}

impl Default for RackTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RackTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            hint: Style::new().dim(),
            header: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            hint: Style::new(),
            header: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a check outcome token, e.g. `OK (Python 3.11)`.
    pub fn format_outcome(&self, outcome: &CheckOutcome) -> String {
        let style = match outcome {
            CheckOutcome::Ok { .. } => &self.ok,
            CheckOutcome::Warning { .. } => &self.warning,
            CheckOutcome::Failed { .. } => &self.error,
        };
        format!("{}", style.apply_to(outcome))
    }

    /// Format a remediation hint line.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(format!("Run: {}", hint)))
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("ERROR: {}", msg)))
    }

    /// Format a banner: a rule, the title, and another rule.
    pub fn format_header(&self, title: &str) -> String {
        let rule = self.border.apply_to("=".repeat(RULE_WIDTH));
        format!("{}\n{}\n{}", rule, self.header.apply_to(title), rule)
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
