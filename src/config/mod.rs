//! Verifier settings and ServerRack configuration loading.
//!
//! - [`settings`] - The expected installation and its env overrides
//! - [`rack`] - Parsing and shape checks for `config.yaml`

pub mod rack;
pub mod settings;

pub use rack::{load_rack_config, RackConfig};
pub use settings::{PythonPackage, VerifierSettings};
