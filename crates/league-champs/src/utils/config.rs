//! Application configuration management utilities.

use crate::errors::CliError;
use camino::{Utf8Path, Utf8PathBuf};
use ltk_champions::SourceConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;

/// Application-wide configuration stored in config.toml.
///
/// ```toml
/// [source]
/// locale = "en_US"
/// fallback_version = "15.3.1"
/// failure_policy = "retry"
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
}

/// Returns the directory where the current executable resides.
pub fn install_dir() -> Option<Utf8PathBuf> {
    let exe = env::current_exe().ok()?;
    let parent = exe.parent()?;
    Utf8PathBuf::from_path_buf(parent.to_path_buf()).ok()
}

/// Returns the default configuration file path (config.toml next to the executable).
pub fn default_config_path() -> Option<Utf8PathBuf> {
    install_dir().map(|dir| dir.join("config.toml"))
}

/// Reads a configuration file. A missing file yields the defaults.
pub fn load_config_from(path: &Utf8Path) -> Result<AppConfig, CliError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CliError::config_parse_error(path.as_std_path().to_path_buf(), e))
}

/// Loads the application configuration from config.toml.
/// Returns default configuration if file doesn't exist or cannot be parsed.
pub fn load_config() -> AppConfig {
    let Some(path) = default_config_path() else {
        return AppConfig::default();
    };
    match load_config_from(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", path, e);
            AppConfig::default()
        }
    }
}

/// Writes the configuration as pretty TOML.
pub fn save_config_to(path: &Utf8Path, cfg: &AppConfig) -> io::Result<()> {
    let content = toml::to_string_pretty(cfg).map_err(io::Error::other)?;
    fs::write(path, content)
}

/// Saves the application configuration to config.toml.
pub fn save_config(cfg: &AppConfig) -> Result<Utf8PathBuf, CliError> {
    let path = default_config_path().ok_or(CliError::ConfigPathUnknown)?;
    save_config_to(&path, cfg)?;
    Ok(path)
}
