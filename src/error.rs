//! Error types for rackcheck operations.
//!
//! This module defines [`RackcheckError`], the primary error type used
//! throughout the verifier, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - An expected check failure is not an error: checks report it as a
//!   [`CheckOutcome`](crate::checks::CheckOutcome)
//! - `RackcheckError` marks a check that could not be evaluated at all
//! - Use `anyhow::Error` (via `RackcheckError::Other`) for unexpected errors

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Core error type for rackcheck operations.
#[derive(Debug, Error)]
pub enum RackcheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Configuration parsed but has the wrong shape.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The program to run could not be found on PATH.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// The command did not exit within its time bound.
    #[error("Command timed out after {}s: {command}", .timeout.as_secs_f64())]
    CommandTimedOut { command: String, timeout: Duration },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rackcheck operations.
pub type Result<T> = std::result::Result<T, RackcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = RackcheckError::ConfigNotFound {
            path: PathBuf::from("/srv/config.yaml"),
        };
        assert!(err.to_string().contains("/srv/config.yaml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = RackcheckError::ConfigParseError {
            path: PathBuf::from("config.yaml"),
            message: "did not find expected node content".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config.yaml"));
        assert!(msg.contains("did not find expected node content"));
    }

    #[test]
    fn command_not_found_displays_program() {
        let err = RackcheckError::CommandNotFound {
            program: "vcgencmd".into(),
        };
        assert!(err.to_string().contains("vcgencmd"));
    }

    #[test]
    fn command_timed_out_displays_command_and_bound() {
        let err = RackcheckError::CommandTimedOut {
            command: "ollama --version".into(),
            timeout: Duration::from_secs(5),
        };
        let msg = err.to_string();
        assert!(msg.contains("ollama --version"));
        assert!(msg.contains("5s"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RackcheckError = io_err.into();
        assert!(matches!(err, RackcheckError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: RackcheckError = anyhow::anyhow!("sensor bus offline").into();
        assert_eq!(err.to_string(), "sensor bus offline");
    }
}
