//! Application configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use courselens_core::ClientConfig;
use courselens_plugin::PluginConfig;

use crate::error::ConfigError;

/// Contents of `config.toml`.
///
/// ```toml
/// [client]
/// server_url = "http://localhost:8080"
/// request_timeout_ms = 120000
///
/// [plugins]
/// policy = "skip"
/// disabled_plugins = ["PriceRateVisualizer"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub plugins: PluginConfig,
}

impl AppConfig {
    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("courselens").join("config.toml"))
    }

    /// Load the config from `path`, or from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load the config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config
            .client
            .validate()
            .map_err(|message| ConfigError::Invalid {
                path: path.to_path_buf(),
                message,
            })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
