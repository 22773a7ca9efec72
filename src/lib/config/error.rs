use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot expand config path '{path}': {reason}")]
    Expand { path: String, reason: String },

    #[error("invalid backend base_url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },

    #[error("max_input_height must be at least 1")]
    InvalidInputHeight,
}
