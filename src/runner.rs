//! Check execution.
//!
//! [`CheckRunner`] walks a check table in order. A check that returns `Err`
//! or panics is recorded as a failure and the run carries on; nothing a
//! single check does can end the run early.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::checks::{Check, CheckContext, DEFAULT_CHECKS};
use crate::report;
use crate::ui::UserInterface;

/// Name and pass/fail of one check after it ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Check name as shown in the summary.
    pub name: String,
    /// Whether the check passed. Warnings count as failures.
    pub passed: bool,
}

/// All results of one run, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    results: Vec<CheckResult>,
}

impl RunSummary {
    /// Wrap an ordered list of results.
    pub fn new(results: Vec<CheckResult>) -> Self {
        Self { results }
    }

    /// Results in the order the checks ran.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Number of checks that ran.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Process exit code: 0 if every check passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Runs an ordered table of checks.
#[derive(Debug, Clone, Copy)]
pub struct CheckRunner<'a> {
    checks: &'a [Check],
}

impl Default for CheckRunner<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKS)
    }
}

impl<'a> CheckRunner<'a> {
    /// Create a runner over `checks`.
    pub fn new(checks: &'a [Check]) -> Self {
        Self { checks }
    }

    /// Run every check once, in order.
    ///
    /// A blank line follows each check regardless of outcome.
    pub fn run(&self, ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> RunSummary {
        let mut results = Vec::with_capacity(self.checks.len());

        for check in self.checks {
            tracing::debug!("Running check: {}", check.name);
            let outcome = catch_unwind(AssertUnwindSafe(|| (check.run)(ctx, &mut *ui)));

            let passed = match outcome {
                Ok(Ok(outcome)) => outcome.passed(),
                Ok(Err(e)) => {
                    tracing::warn!("Check '{}' could not be evaluated: {}", check.name, e);
                    ui.error(&e.to_string());
                    false
                }
                Err(payload) => {
                    let msg = panic_message(payload.as_ref());
                    tracing::warn!("Check '{}' panicked: {}", check.name, msg);
                    ui.error(&msg);
                    false
                }
            };

            results.push(CheckResult {
                name: check.name.to_string(),
                passed,
            });
            ui.message("");
        }

        RunSummary::new(results)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "check panicked".to_string()
    }
}

/// Run a full verification: banner, every check, then the summary.
pub fn verify(
    runner: &CheckRunner<'_>,
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> RunSummary {
    report::print_banner(ui);
    let summary = runner.run(ctx, ui);
    report::print_summary(ui, &summary, &ctx.settings.launch_command);
    summary
}
