//! rackcheck - Installation verifier for ServerRack hosts.
//!
//! rackcheck runs a fixed list of independent checks (Python version and
//! packages, the Ollama daemon and its service, `config.yaml`, SSH key,
//! temperature sensor), prints a live OK / FAILED / WARNING line for each,
//! then a PASS/FAIL summary. The exit code is 0 only if every check passed.
//!
//! # Modules
//!
//! - [`checks`] - The check table and each check's logic
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Verifier settings and `config.yaml` loading
//! - [`error`] - Error types and result aliases
//! - [`report`] - Banner and summary output
//! - [`runner`] - Ordered execution with per-check isolation
//! - [`shell`] - Bounded-wait external command execution
//! - [`ui`] - Terminal output and the mock used in tests
//!
//! # Example
//!
//! ```
//! use std::path::PathBuf;
//! use rackcheck::checks::{Check, CheckContext, CheckOutcome};
//! use rackcheck::config::VerifierSettings;
//! use rackcheck::runner::CheckRunner;
//! use rackcheck::shell::MockRunner;
//! use rackcheck::ui::{MockUI, UserInterface};
//!
//! fn always_ok(
//!     _: &CheckContext<'_>,
//!     ui: &mut dyn UserInterface,
//! ) -> rackcheck::Result<CheckOutcome> {
//!     ui.begin_check("nothing");
//!     ui.finish_check(&CheckOutcome::ok());
//!     Ok(CheckOutcome::ok())
//! }
//!
//! let settings = VerifierSettings::default();
//! let runner = MockRunner::new();
//! let ctx = CheckContext::new(&settings, &runner, PathBuf::from("."), None);
//! let checks = [Check { name: "Nothing", run: always_ok }];
//!
//! let mut ui = MockUI::new();
//! let summary = CheckRunner::new(&checks).run(&ctx, &mut ui);
//! assert_eq!(summary.exit_code(), 0);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{RackcheckError, Result};
