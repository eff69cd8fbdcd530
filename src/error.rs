//! Application error types.
//!
//! Classification itself is infallible; these cover loading schemas,
//! resolving traversal roots, configuration and output encoding.

use thiserror::Error;

/// Application-level errors for propsift.
#[derive(Error, Debug)]
pub enum AppError {
    // Input errors
    #[error("Failed to read schema '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // Root resolution errors
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    #[error("Property is not an object: {0}")]
    NotAnObject(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    // Output errors
    #[error("Failed to encode output: {0}")]
    Encode(String),
}
