//! Subject configuration
//!
//! Configuration is plain serde data so it can be embedded in a larger
//! application config or loaded from a standalone JSON file.

use crate::error::ConfigError;
use crate::events::NotifyPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings applied to a [`Subject`](crate::events::Subject) at construction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectConfig {
    /// What to do when an observer fails during a broadcast
    pub policy: NotifyPolicy,
}

impl SubjectConfig {
    /// Parse a configuration from JSON text
    ///
    /// Missing fields fall back to their defaults, so `{}` is a valid config.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
