//! Error types for core module
//!
//! Provides custom error types for core functionality: loading, validating
//! and saving the view configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file I/O error
    #[error("Config I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration serialization/deserialization error
    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A configuration value is out of range
    #[error("Invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
