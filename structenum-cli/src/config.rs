//! Configuration loading from structenum.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Config file looked up at the scan root.
pub const CONFIG_FILE: &str = "structenum.toml";

/// Main configuration structure for structenum.toml.
#[derive(Debug, Deserialize, Default)]
pub struct StructenumConfig {
    /// Directory names to skip in addition to the defaults.
    pub exclude: Option<Vec<String>>,
    /// Casing used to preview derived values: "identity", "lowercase" or "uppercase".
    pub casing: Option<String>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from structenum.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<StructenumConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let cfg = toml::from_str(&content).context("Invalid structenum.toml")?;
    Ok(Some(cfg))
}
