//! Persisted application settings.
//!
//! Settings live in a TOML file under the `.leadvision` root. A missing
//! file means defaults; a malformed one surfaces as a `ConfigError` so the
//! caller can decide to fall back.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::leads::{Lead, LeadPool};

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Aggregate application settings loaded from disk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub alert: AlertSettings,
    /// Optional custom lead pool; the built-in demo pool applies when absent.
    #[serde(default)]
    pub leads: Option<Vec<Lead>>,
}

/// Window behavior for the alert screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSettings {
    /// Cover the whole screen while the alert is up.
    #[serde(default = "default_flag")]
    pub fullscreen: bool,
    /// Keep the alert above every other window.
    #[serde(default = "default_flag")]
    pub always_on_top: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            always_on_top: true,
        }
    }
}

fn default_flag() -> bool {
    true
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to resolve the application directory.
    #[error(transparent)]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to read the configuration file.
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write the configuration file.
    #[error("Failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for the expected schema.
    #[error("Failed to parse config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// The configuration could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir()?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    load_from_path(&config_path()?)
}

/// Load configuration from an explicit path; missing file means defaults.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration to the default location.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    save_to_path(config, &config_path()?)
}

/// Persist configuration to an explicit path.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the lead pool the config describes.
pub fn lead_pool(config: &AppConfig) -> LeadPool {
    match &config.leads {
        Some(leads) => LeadPool::new(leads.clone()),
        None => LeadPool::demo(),
    }
}
