//! Error handling types and utilities.
//!
//! The search core is total and never fails. Errors only come from the edges:
//! decoding content payloads and loading configuration.

use std::path::PathBuf;

/// A specialized Result type for the binary and other fallible edges.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when reading or decoding verse and chapter content fails.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read content from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The payload was not valid JSON of the expected shape.
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Error returned when loading the configuration file fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
