//! rackcheck CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use rackcheck::checks::CheckContext;
use rackcheck::cli::Cli;
use rackcheck::config::VerifierSettings;
use rackcheck::runner::{verify, CheckRunner};
use rackcheck::shell::SystemRunner;
use rackcheck::ui::TerminalUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, keeping the report uncluttered
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("rackcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rackcheck=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("rackcheck starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_dir = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let settings = VerifierSettings::from_env();
    let ctx = CheckContext::new(&settings, &SystemRunner, project_dir, dirs::home_dir());
    let mut ui = TerminalUI::new();

    let summary = verify(&CheckRunner::default(), &ctx, &mut ui);
    ExitCode::from(summary.exit_code() as u8)
}
