use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FindFixError, Result};

/// Represents the complete configuration for find-fix.
///
/// What used to be script-level globals lives here: which repository
/// prefixes to strip from raw tags, and how the report is reduced.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Configuration for raw tag handling before resolution.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct TagsConfig {
    /// Repository-specific prefixes stripped from tags before parsing
    /// (e.g. older packaging tags named "acs-packaging-7.0.0")
    #[serde(default)]
    pub strip_prefixes: Vec<String>,

    /// Only consider full release tags; drops -A/-M/-RC pre-releases
    #[serde(default)]
    pub releases_only: bool,
}

/// Configuration for report output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ReportConfig {
    /// Report every well-formed tag instead of the reduced frontier
    #[serde(default)]
    pub show_all: bool,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `findfix.toml` in current directory
/// 3. `~/.config/.findfix.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./findfix.toml").exists() {
        fs::read_to_string("./findfix.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".findfix.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| FindFixError::config(format!("invalid configuration: {}", e)))
}
