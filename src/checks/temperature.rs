//! Hardware temperature check.
//!
//! On a Raspberry Pi the sensor is read with `vcgencmd measure_temp`. Other
//! hosts may not have the tool at all, which is only worth a warning.

use anyhow::anyhow;

use crate::error::{RackcheckError, Result};
use crate::ui::UserInterface;

use super::{finish, CheckContext, CheckOutcome};

/// Check the temperature command runs and report its reading.
pub fn check_temperature(
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<CheckOutcome> {
    ui.begin_check("temperature monitoring");
    let settings = ctx.settings;

    let (program, args) = settings
        .temperature_command
        .split_first()
        .ok_or_else(|| anyhow!("temperature command is empty"))?;
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let outcome = match ctx.runner.run(program, &args, settings.command_timeout) {
        Ok(result) if result.success => CheckOutcome::ok_with(result.stdout.trim()),
        Ok(_) => CheckOutcome::Failed { reason: None },
        Err(RackcheckError::CommandNotFound { .. }) => {
            CheckOutcome::warning(format!("{} not available", program), None)
        }
        Err(e) => CheckOutcome::failed(e.to_string()),
    };
    finish(ui, outcome)
}
