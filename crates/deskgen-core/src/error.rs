//! Error types for deskgen.
//!
//! Every failure the launcher builder can report is one of these variants.
//! Callers that want a value instead of a `Result` use
//! [`WriteOutcome`](crate::launcher::WriteOutcome), which is built from them.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the deskgen library.
#[derive(Debug, Error)]
pub enum DeskgenError {
    // Input errors
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    // Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for deskgen operations.
pub type Result<T> = std::result::Result<T, DeskgenError>;

impl From<std::io::Error> for DeskgenError {
    fn from(err: std::io::Error) -> Self {
        DeskgenError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for DeskgenError {
    fn from(err: serde_json::Error) -> Self {
        DeskgenError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl DeskgenError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        DeskgenError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// Shorthand for a validation failure on a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DeskgenError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
