//! Installation checks.
//!
//! A [`Check`] is a name plus a function pointer. The built-in checks live
//! in [`DEFAULT_CHECKS`], an ordered, immutable table that the
//! [`CheckRunner`](crate::runner::CheckRunner) walks once per run.
//!
//! Every check reads the host only through its [`CheckContext`], so tests
//! can point it at a [`MockRunner`](crate::shell::MockRunner) and a scratch
//! directory.
//!
//! # Modules
//!
//! - [`outcome`] - OK / FAILED / WARNING outcome type
//! - [`python`] - Interpreter version and package imports
//! - [`daemon`] - Inference daemon binary and service state
//! - [`files`] - Configuration file and SSH key
//! - [`temperature`] - Hardware temperature sensor

pub mod daemon;
pub mod files;
pub mod outcome;
pub mod python;
pub mod temperature;

pub use outcome::CheckOutcome;

use std::path::PathBuf;

use crate::config::VerifierSettings;
use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Everything a check may read.
pub struct CheckContext<'a> {
    /// Expected installation.
    pub settings: &'a VerifierSettings,
    /// Runs external programs.
    pub runner: &'a dyn CommandRunner,
    /// Directory holding the ServerRack config file.
    pub project_dir: PathBuf,
    /// Invoking user's home directory, if it could be determined.
    pub home_dir: Option<PathBuf>,
}

impl<'a> CheckContext<'a> {
    /// Create a context.
    pub fn new(
        settings: &'a VerifierSettings,
        runner: &'a dyn CommandRunner,
        project_dir: PathBuf,
        home_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            settings,
            runner,
            project_dir,
            home_dir,
        }
    }
}

/// Body of a check.
///
/// Prints its own progress through `ui` and returns the outcome. `Err` means
/// the check could not be evaluated; the runner records it as a failure.
pub type CheckFn = fn(&CheckContext<'_>, &mut dyn UserInterface) -> Result<CheckOutcome>;

/// A named check.
#[derive(Clone, Copy)]
pub struct Check {
    /// Name shown in the summary.
    pub name: &'static str,
    /// The check body.
    pub run: CheckFn,
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check").field("name", &self.name).finish()
    }
}

/// The built-in checks, in run order.
pub const DEFAULT_CHECKS: &[Check] = &[
    Check {
        name: "Python Version",
        run: python::check_python_version,
    },
    Check {
        name: "Python Packages",
        run: python::check_python_packages,
    },
    Check {
        name: "Ollama",
        run: daemon::check_daemon_installed,
    },
    Check {
        name: "Ollama Service",
        run: daemon::check_daemon_service,
    },
    Check {
        name: "Configuration",
        run: files::check_config_file,
    },
    Check {
        name: "SSH Keys",
        run: files::check_ssh_key,
    },
    Check {
        name: "Temperature Monitoring",
        run: temperature::check_temperature,
    },
];

/// Print the outcome and hand it back.
pub(crate) fn finish(ui: &mut dyn UserInterface, outcome: CheckOutcome) -> Result<CheckOutcome> {
    ui.finish_check(&outcome);
    Ok(outcome)
}
