//! Runtime configuration for the command-line front end.
//!
//! Only presentation and memoization are configurable. The normalization rule
//! table is fixed in code.

use crate::error::ConfigError;
use crate::search::DEFAULT_CACHE_CAPACITY;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Memoized fields kept across searches. Zero disables memoization.
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Inserted before each highlighted run.
    pub open_marker: String,
    /// Inserted after each highlighted run.
    pub close_marker: String,
    /// Emit JSON instead of marked-up text.
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            open_marker: "[".to_string(),
            close_marker: "]".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// Loads the config from `explicit` if given, else from the default
    /// location if a file exists there, else returns defaults.
    ///
    /// A missing explicit path is an error; a missing default file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// `<config dir>/ayah-search/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ayah-search").join("config.toml"))
    }
}
