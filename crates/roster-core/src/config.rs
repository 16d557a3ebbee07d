use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::format::{RecordFormatter, DEFAULT_SEPARATOR};
use crate::RosterError;

pub const CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub separator: String,
    pub numbered: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            numbered: false,
        }
    }
}

impl RosterConfig {
    pub fn formatter(&self) -> RecordFormatter {
        RecordFormatter::new().with_separator(self.separator.clone())
    }
}

pub fn read_config(path: &Path) -> Result<RosterConfig, RosterError> {
    let content = std::fs::read_to_string(path)?;
    let config: RosterConfig =
        toml::from_str(&content).map_err(|e| RosterError::Config(e.to_string()))?;
    Ok(config)
}

/// Reads the config at `path`, falling back to defaults when the file does
/// not exist. A file that exists but fails to parse is still an error.
pub fn load_or_default(path: &Path) -> Result<RosterConfig, RosterError> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(RosterConfig::default());
    }
    read_config(path)
}

pub fn write_config(path: &Path, config: &RosterConfig) -> Result<(), RosterError> {
    let toml_str =
        toml::to_string_pretty(config).map_err(|e| RosterError::Config(e.to_string()))?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
