//! Terminal output for check progress and the final report.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real stdout output
//! - [`MockUI`] which renders into a buffer for assertions
//!
//! # Example
//!
//! ```
//! use rackcheck::checks::CheckOutcome;
//! use rackcheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.begin_check("SSH keys");
//! ui.finish_check(&CheckOutcome::ok());
//! assert!(ui.has_line("Testing SSH keys... OK"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, RackTheme};

use crate::checks::CheckOutcome;

/// Trait for user interface interactions.
///
/// A check announces itself with [`begin_check`](Self::begin_check), which
/// leaves the line open, then closes it with
/// [`finish_check`](Self::finish_check). Any other output while a line is
/// open starts on a fresh line.
pub trait UserInterface {
    /// Display a plain line.
    fn message(&mut self, msg: &str);

    /// Display an error line (`ERROR: <msg>`).
    fn error(&mut self, msg: &str);

    /// Show a banner.
    fn show_header(&mut self, title: &str);

    /// Print `Testing <label>... ` without ending the line.
    fn begin_check(&mut self, label: &str);

    /// Print the outcome token and end the line, then any hint.
    fn finish_check(&mut self, outcome: &CheckOutcome);
}
