//! Error type shared by every configuration operation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration file operations.
///
/// Each variant corresponds to one failure class of the store: path
/// resolution, reading, decoding, encoding, and writing.  None of them are
/// retried; the caller decides whether to log and continue.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    PathResolution,

    /// The config file could not be opened or read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a valid preferences document.
    #[error("failed to decode config JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The document could not be serialized.
    #[error("failed to encode config JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The config file (or its directory) could not be created or overwritten.
    #[error("failed to write config at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns `true` for failures that happened while loading the document.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, ConfigError::Read { .. } | ConfigError::Decode(_))
    }
}
