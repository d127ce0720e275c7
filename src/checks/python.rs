//! Python interpreter checks.
//!
//! ServerRack is a Python application, so the host needs a recent enough
//! interpreter and the third-party packages it imports.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{RackcheckError, Result};
use crate::ui::UserInterface;

use super::{finish, CheckContext, CheckOutcome};

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python\s+(\d+)\.(\d+)").unwrap());

/// Extract `(major, minor)` from `python --version` output.
pub fn parse_python_version(output: &str) -> Option<(u32, u32)> {
    let caps = VERSION_REGEX.captures(output)?;
    let major = caps[1].parse().ok()?;
    let minor = caps[2].parse().ok()?;
    Some((major, minor))
}

/// Whether `version` is at least `minimum`, comparing major then minor.
pub fn meets_minimum(version: (u32, u32), minimum: (u32, u32)) -> bool {
    version >= minimum
}

/// Check the interpreter version against the configured minimum.
pub fn check_python_version(
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<CheckOutcome> {
    ui.begin_check("Python version");
    let settings = ctx.settings;

    let result = match ctx.runner.run(
        &settings.python_command,
        &["--version"],
        settings.command_timeout,
    ) {
        Ok(result) => result,
        Err(RackcheckError::CommandNotFound { program }) => {
            return finish(ui, CheckOutcome::failed(format!("{} not found", program)));
        }
        Err(RackcheckError::CommandTimedOut { .. }) => {
            return finish(ui, CheckOutcome::failed("timeout"));
        }
        Err(e) => return Err(e),
    };

    // Python 2 prints its version on stderr
    let Some(version) =
        parse_python_version(&result.stdout).or_else(|| parse_python_version(&result.stderr))
    else {
        return finish(ui, CheckOutcome::failed("unrecognized version output"));
    };

    let label = format!("Python {}.{}", version.0, version.1);
    let outcome = if meets_minimum(version, settings.min_python) {
        CheckOutcome::ok_with(label)
    } else {
        CheckOutcome::failed(format!("{} < {}", label, settings.min_python_label()))
    };
    finish(ui, outcome)
}

/// Check that every configured package imports.
///
/// Each package gets its own progress line; the aggregate outcome is not
/// printed, only returned.
pub fn check_python_packages(
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<CheckOutcome> {
    let settings = ctx.settings;
    let mut missing = Vec::new();

    for package in &settings.packages {
        ui.begin_check(&package.display);
        let statement = format!("import {}", package.module);

        let outcome = match ctx.runner.run(
            &settings.python_command,
            &["-c", statement.as_str()],
            settings.command_timeout,
        ) {
            Ok(result) if result.success => CheckOutcome::ok(),
            Ok(_) => CheckOutcome::Failed { reason: None },
            Err(RackcheckError::CommandNotFound { program }) => {
                CheckOutcome::failed(format!("{} not found", program))
            }
            Err(RackcheckError::CommandTimedOut { .. }) => CheckOutcome::failed("timeout"),
            Err(e) => return Err(e),
        };

        ui.finish_check(&outcome);
        if !outcome.passed() {
            tracing::debug!("Package {} ({}) failed to import", package.display, package.module);
            missing.push(package.display.clone());
        }
    }

    Ok(if missing.is_empty() {
        CheckOutcome::ok()
    } else {
        CheckOutcome::failed(format!("missing: {}", missing.join(", ")))
    })
}
