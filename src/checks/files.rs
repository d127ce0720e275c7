//! Filesystem checks: the ServerRack config file and the SSH key.

use anyhow::anyhow;

use crate::config::load_rack_config;
use crate::error::{RackcheckError, Result};
use crate::ui::UserInterface;

use super::{finish, CheckContext, CheckOutcome};

const SSH_KEYGEN_HINT: &str = "ssh-keygen -t rsa -b 4096";

/// Check the config file exists, parses, and lists at least one node.
pub fn check_config_file(
    ctx: &CheckContext<'_>,
    ui: &mut dyn UserInterface,
) -> Result<CheckOutcome> {
    let config_file = &ctx.settings.config_file;
    ui.begin_check(&config_file.display().to_string());

    let path = ctx.project_dir.join(config_file);
    let outcome = match load_rack_config(&path) {
        Ok(config) => match config.require_nodes() {
            Ok(1) => CheckOutcome::ok_with("1 node configured"),
            Ok(count) => CheckOutcome::ok_with(format!("{} nodes configured", count)),
            Err(_) => CheckOutcome::failed("no nodes configured"),
        },
        Err(RackcheckError::ConfigNotFound { .. }) => CheckOutcome::failed("not found"),
        Err(RackcheckError::ConfigParseError { message, .. }) => CheckOutcome::failed(message),
        Err(e) => CheckOutcome::failed(e.to_string()),
    };
    finish(ui, outcome)
}

/// Check the SSH private key exists. Its content is never read.
pub fn check_ssh_key(ctx: &CheckContext<'_>, ui: &mut dyn UserInterface) -> Result<CheckOutcome> {
    ui.begin_check("SSH keys");

    let home = ctx
        .home_dir
        .as_ref()
        .ok_or_else(|| anyhow!("cannot determine home directory"))?;

    let outcome = if home.join(&ctx.settings.ssh_key).exists() {
        CheckOutcome::ok()
    } else {
        CheckOutcome::warning("no SSH key found", Some(SSH_KEYGEN_HINT))
    };
    finish(ui, outcome)
}
