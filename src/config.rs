//! Configuration file handling for ansi-preview.
//!
//! Loads configuration from `<config dir>/ansi-preview/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::PreviewError;
use crate::render::{Alignment, RenderConfig, DEFAULT_SCALE_PERCENT, SCALE_RANGE_MESSAGE};

/// Configuration file structure for ansi-preview.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderSection,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct RenderSection {
    /// Image width as a percentage of the terminal width
    #[serde(default)]
    pub scale: Option<i64>,
    /// left, center or right
    #[serde(default)]
    pub position: Option<Alignment>,
}

impl Config {
    /// Load configuration from a file path, or the default path when `None`.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Merge command-line overrides over this file's values and the defaults.
    ///
    /// The scale is taken as a wide signed number so that negative or huge
    /// values from either source fail with the same range message.
    pub fn resolve(
        &self,
        scale: Option<i64>,
        alignment: Option<Alignment>,
    ) -> Result<RenderConfig, PreviewError> {
        let scale = scale
            .or(self.render.scale)
            .unwrap_or(DEFAULT_SCALE_PERCENT as i64);
        let scale = u32::try_from(scale)
            .map_err(|_| PreviewError::invalid_config(SCALE_RANGE_MESSAGE))?;
        let alignment = alignment.or(self.render.position).unwrap_or_default();
        RenderConfig::new(scale, alignment)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ansi-preview").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ansi-preview/config.toml")
        })
}
