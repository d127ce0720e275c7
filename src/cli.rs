//! CLI argument definitions.
//!
//! Running `rackcheck` with no arguments checks the current directory with
//! the reference settings. The flags only adjust output and where to look.

use clap::Parser;
use std::path::PathBuf;

/// rackcheck - Verify a host is ready to run ServerRack.
#[derive(Debug, Default, Parser)]
#[command(name = "rackcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing config.yaml (defaults to the current directory)
    #[arg(short, long, env = "RACKCHECK_PROJECT")]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_uses_defaults() {
        let cli = Cli::try_parse_from(["rackcheck"]).unwrap();
        assert!(cli.project.is_none());
        assert!(!cli.no_color);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_all_flags() {
        let cli =
            Cli::try_parse_from(["rackcheck", "--project", "/srv/rack", "--no-color", "--debug"])
                .unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/srv/rack")));
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["rackcheck", "--install"]).is_err());
    }
}
