//! Inference daemon checks.
//!
//! The daemon (Ollama in the reference setup) is managed outside the
//! verifier. These checks only ask it for its version and ask the service
//! manager whether its unit is running.

use crate::error::{RackcheckError, Result};
use crate::ui::UserInterface;

use super::{finish, CheckContext, CheckOutcome};

/// Capitalize a command name for display ("ollama" -> "Ollama").
pub fn display_name(command: &str) -> String {
    let mut chars = command.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check the daemon binary answers `--version`.
pub fn check_daemon_installed(
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<CheckOutcome> {
    let settings = ctx.settings;
    ui.begin_check(&format!("{} installation", display_name(&settings.daemon_command)));

    let outcome = match ctx.runner.run(
        &settings.daemon_command,
        &["--version"],
        settings.command_timeout,
    ) {
        Ok(result) if result.success => CheckOutcome::ok_with(result.stdout.trim()),
        Ok(_) => CheckOutcome::failed("command failed"),
        Err(RackcheckError::CommandNotFound { .. }) => CheckOutcome::failed("not installed"),
        Err(RackcheckError::CommandTimedOut { .. }) => CheckOutcome::failed("timeout"),
        Err(e) => return Err(e),
    };
    finish(ui, outcome)
}

/// Check the service manager reports the daemon unit as `active`.
///
/// Anything else, including a failed query, is a warning with a hint to
/// start the service.
pub fn check_daemon_service(
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<CheckOutcome> {
    let settings = ctx.settings;
    ui.begin_check(&format!("{} service", display_name(&settings.daemon_command)));

    let manager = &settings.service_manager;
    let service = &settings.daemon_service;
    let hint = format!("sudo {} start {}", manager, service);

    // `is-active` exits non-zero for inactive units, so only stdout matters
    let outcome = match ctx.runner.run(
        manager,
        &["is-active", service.as_str()],
        settings.command_timeout,
    ) {
        Ok(result) => match result.stdout.trim() {
            "active" => CheckOutcome::ok_with("running"),
            "" => CheckOutcome::warning("unknown", Some(hint.as_str())),
            state => CheckOutcome::warning(state, Some(hint.as_str())),
        },
        Err(e) => {
            tracing::debug!("Service state query failed: {}", e);
            CheckOutcome::warning("cannot check", Some(hint.as_str()))
        }
    };
    finish(ui, outcome)
}
