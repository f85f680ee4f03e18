//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading settings or validating a run.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse settings file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A value was present but unusable.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// A run parameter was rejected.
    #[error("Invalid {name}: {message}")]
    InvalidArgument { name: String, message: String },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },
}
