use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
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
    /// `canute-ui/config.toml` under the platform config directory, or the
    /// current directory when there is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("canute-ui").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks:
    /// - the display has at least one cell per row
    /// - there is a header row plus at least one content row
    /// - the poll interval is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width == 0 {
            return Err(ConfigError::ValidationError {
                message: "display.width must be at least 1".to_string(),
            });
        }

        if self.display.height < 2 {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "display.height must be at least 2, got {}",
                    self.display.height
                ),
            });
        }

        if self.runtime.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "runtime.poll_interval_ms must be positive".to_string(),
            });
        }

        Ok(())
    }
}
