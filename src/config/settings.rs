//! Verifier settings.
//!
//! [`VerifierSettings::default`] is the reference ServerRack setup: which
//! interpreter, packages, daemon and sensor tool to look for, and how long
//! to wait on each external command. A handful of `RACKCHECK_*` environment
//! variables can override it.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the Python interpreter command.
pub const ENV_PYTHON: &str = "RACKCHECK_PYTHON";
/// Environment variable overriding the per-command timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "RACKCHECK_TIMEOUT_SECS";
/// Environment variable overriding the configuration file name.
pub const ENV_CONFIG_FILE: &str = "RACKCHECK_CONFIG_FILE";
/// Environment variable overriding the daemon command and service name.
pub const ENV_DAEMON: &str = "RACKCHECK_DAEMON";

/// A Python package the ServerRack application imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonPackage {
    /// Module name passed to `import` (e.g., "yaml").
    pub module: String,
    /// Name shown to the user (e.g., "PyYAML").
    pub display: String,
}

impl PythonPackage {
    /// Create a package entry.
    pub fn new(module: &str, display: &str) -> Self {
        Self {
            module: module.to_string(),
            display: display.to_string(),
        }
    }
}

/// Everything the checks need to know about the expected installation.
#[derive(Debug, Clone)]
pub struct VerifierSettings {
    /// Python interpreter to query.
    pub python_command: String,
    /// Minimum supported (major, minor) Python version.
    pub min_python: (u32, u32),
    /// Packages that must be importable.
    pub packages: Vec<PythonPackage>,
    /// Inference daemon executable.
    pub daemon_command: String,
    /// Service unit name of the daemon.
    pub daemon_service: String,
    /// Host service manager executable.
    pub service_manager: String,
    /// Configuration file, relative to the project directory.
    pub config_file: PathBuf,
    /// SSH private key, relative to the home directory.
    pub ssh_key: PathBuf,
    /// Temperature measurement command (program followed by args).
    pub temperature_command: Vec<String>,
    /// Upper bound on each external command.
    pub command_timeout: Duration,
    /// Command suggested once every check passes.
    pub launch_command: String,
}

impl Default for VerifierSettings {
    fn default() -> Self {
        Self {
            python_command: "python3".to_string(),
            min_python: (3, 8),
            packages: vec![
                PythonPackage::new("customtkinter", "CustomTkinter"),
                PythonPackage::new("yaml", "PyYAML"),
                PythonPackage::new("paramiko", "Paramiko"),
                PythonPackage::new("psutil", "psutil"),
                PythonPackage::new("requests", "Requests"),
            ],
            daemon_command: "ollama".to_string(),
            daemon_service: "ollama".to_string(),
            service_manager: "systemctl".to_string(),
            config_file: PathBuf::from("config.yaml"),
            ssh_key: PathBuf::from(".ssh").join("id_rsa"),
            temperature_command: vec!["vcgencmd".to_string(), "measure_temp".to_string()],
            command_timeout: Duration::from_secs(5),
            launch_command: "./run.sh".to_string(),
        }
    }
}

impl VerifierSettings {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key: &str| std::env::var(key))
    }

    /// Defaults with overrides from a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let mut settings = Self::default();
        let lookup = |key: &str| {
            env_fn(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(python) = lookup(ENV_PYTHON) {
            settings.python_command = python;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => settings.command_timeout = Duration::from_secs(secs),
                _ => tracing::warn!("Ignoring {}={:?}: expected a positive integer", ENV_TIMEOUT_SECS, raw),
            }
        }

        if let Some(file) = lookup(ENV_CONFIG_FILE) {
            settings.config_file = PathBuf::from(file);
        }

        if let Some(daemon) = lookup(ENV_DAEMON) {
            settings.daemon_service = daemon.clone();
            settings.daemon_command = daemon;
        }

        tracing::debug!("Resolved settings: {:?}", settings);
        settings
    }

    /// Minimum Python version formatted as `major.minor`.
    pub fn min_python_label(&self) -> String {
        format!("{}.{}", self.min_python.0, self.min_python.1)
    }
}
