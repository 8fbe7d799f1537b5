use std::io;

use thiserror::Error;

/// Library-wide error type for the sync-upstreams entrypoint.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// One or more required action inputs are absent or blank.
    #[error("Missing required input(s): {}", .0.join(", "))]
    MissingInputs(Vec<String>),

    /// An input is present but cannot be used as given.
    #[error("Invalid input '{key}': {reason}")]
    InvalidInput { key: String, reason: String },

    /// Inputs file could not be read or parsed.
    #[error("Failed to load inputs file '{path}': {details}")]
    InputsFile { path: String, details: String },

    /// The external tool could not be started.
    #[error("Failed to start '{program}': {details}")]
    ToolSpawn { program: String, details: String },

    /// Internal failure (serialization and similar).
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
