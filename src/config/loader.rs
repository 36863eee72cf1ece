use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Why a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `mimer/config.toml` under the platform config directory, or under the
    /// working directory when the platform has none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mimer").join("config.toml")
    }

    /// Config from [`Config::config_path`]; defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse and validate the TOML file at `path`. Sections and keys it
    /// leaves out take their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let path_buf = || path.to_path_buf();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path_buf(),
            source,
        })?;
        let config = toml::from_str::<Self>(&content).map_err(|source| ConfigError::ParseError {
            path: path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject a blank log filter and an empty catalog path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.filter must not be empty".to_string(),
            });
        }

        if let Some(catalog) = &self.clock.catalog {
            if catalog.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "clock.catalog must not be an empty path".to_string(),
                });
            }
        }

        Ok(())
    }
}
