//! Configuration file handling
//!
//! Settings live in `config.toml` under the platform config directory
//! (`~/.config/folio/config.toml` on Linux). Every field is optional; a
//! missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::shell::BootTiming;

/// Errors from loading, validating or saving the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid boot timing: min_delay_ms ({min}) must be less than max_delay_ms ({max})")]
    InvalidTiming { min: u64, max: u64 },
}

/// Boot animation delays in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub settle_ms: u64,
}

impl Default for BootConfig {
    fn default() -> Self {
        let timing = BootTiming::default();
        Self {
            min_delay_ms: timing.min_delay.as_millis() as u64,
            max_delay_ms: timing.max_delay.as_millis() as u64,
            settle_ms: timing.settle.as_millis() as u64,
        }
    }
}

/// Names shown in the shell prompt and window title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub user: String,
    pub host: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            user: "user".to_string(),
            host: "portfolio".to_string(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Theme name: classic, ocean or matrix
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "classic".to_string(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project catalog file (.toml or .json); builtin projects when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    pub boot: BootConfig,
    pub prompt: PromptConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("folio").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.boot_timing()?;

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_err)
    }

    /// Pretty TOML rendering of the config.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Boot timing described by the `[boot]` section.
    pub fn boot_timing(&self) -> Result<BootTiming, ConfigError> {
        let boot = &self.boot;
        if boot.min_delay_ms >= boot.max_delay_ms {
            return Err(ConfigError::InvalidTiming {
                min: boot.min_delay_ms,
                max: boot.max_delay_ms,
            });
        }
        Ok(BootTiming {
            min_delay: Duration::from_millis(boot.min_delay_ms),
            max_delay: Duration::from_millis(boot.max_delay_ms),
            settle: Duration::from_millis(boot.settle_ms),
        })
    }
}
