//! ServerRack configuration file loading.
//!
//! The verifier only cares about the shape of `config.yaml`: it must be a
//! YAML mapping whose `nodes` key holds a non-empty collection. Everything
//! else in the document belongs to the ServerRack application and is ignored.

use crate::error::{RackcheckError, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// The parts of `config.yaml` the verifier inspects.
#[derive(Debug, Clone, Default)]
pub struct RackConfig {
    /// Configured nodes; a list in practice, but any collection counts.
    pub nodes: Option<Value>,
}

impl RackConfig {
    /// Parse a config document from a string.
    ///
    /// An empty document parses to a config with no nodes. A document that
    /// is valid YAML but not a mapping is a parse error. Keys other than
    /// `nodes` are ignored whatever their type.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let parse_error = |message: String| RackcheckError::ConfigParseError {
            path: path.to_path_buf(),
            message,
        };

        let value: Value = serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        match value {
            Value::Null => Ok(Self::default()),
            Value::Mapping(map) => Ok(Self {
                nodes: map.get("nodes").filter(|v| !v.is_null()).cloned(),
            }),
            _ => Err(parse_error("expected a mapping at the top level".to_string())),
        }
    }

    /// Number of configured nodes, if `nodes` holds a collection.
    ///
    /// Returns `None` when `nodes` is absent, null, or a scalar.
    pub fn node_count(&self) -> Option<usize> {
        match self.nodes.as_ref()? {
            Value::Sequence(seq) => Some(seq.len()),
            Value::Mapping(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Validate that at least one node is configured, returning the count.
    pub fn require_nodes(&self) -> Result<usize> {
        match self.node_count() {
            Some(count) if count > 0 => Ok(count),
            _ => Err(RackcheckError::ConfigValidationError {
                message: "no nodes configured".to_string(),
            }),
        }
    }
}

/// Load and parse a config file.
///
/// Returns [`RackcheckError::ConfigNotFound`] if the file doesn't exist.
pub fn load_rack_config(path: &Path) -> Result<RackConfig> {
    if !path.exists() {
        return Err(RackcheckError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    RackConfig::parse(&content, path)
}
