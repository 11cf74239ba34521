//! CLI configuration loaded from a TOML file.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{CliError, Result};

/// Settings shared by the spectrum subcommands.
///
/// Loaded from the file named by the global `--config` flag. A missing
/// file is not an error (every field has a default), but a file that
/// exists and fails to parse is.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default largest index when a command omits `--bound`.
    pub bound: usize,

    /// Number of rows printed in sample tables.
    pub sample_rows: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            bound: 50,
            sample_rows: 40,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            debug!("configuration file {} not found, using defaults", path);
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| CliError::Config(e.to_string()))
    }
}
