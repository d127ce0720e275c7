//! Run banner and final summary.
//!
//! The summary is binary: a check that showed WARNING during the run is
//! listed as FAIL here.

use crate::runner::RunSummary;
use crate::ui::UserInterface;

/// Title of the opening banner.
pub const BANNER_TITLE: &str = "ServerRack Installation Test";

/// Print the opening banner.
pub fn print_banner(ui: &mut dyn UserInterface) {
    ui.show_header(BANNER_TITLE);
    ui.message("");
}

/// `PASS` or `FAIL`.
pub fn status_label(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Print the per-check tally, the pass count, and what to do next.
pub fn print_summary(ui: &mut dyn UserInterface, summary: &RunSummary, launch_command: &str) {
    ui.show_header("Summary");

    for result in summary.results() {
        ui.message(&format!("{}: {}", result.name, status_label(result.passed)));
    }

    ui.message("");
    ui.message(&format!("Passed: {}/{}", summary.passed(), summary.total()));
    ui.message("");

    if summary.all_passed() {
        ui.message("All tests passed! You can now run:");
        ui.message(&format!("  {}", launch_command));
    } else {
        ui.message("Some tests failed. Please check the output above.");
        ui.message("Refer to README.md or QUICKSTART.md for help.");
    }
}
