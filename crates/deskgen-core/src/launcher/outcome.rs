//! Value-level result of a generation request.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{DeskgenError, Result};

/// Why a generation request failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// A required field was missing or a value was unusable. Nothing was
    /// written.
    Validation { field: String, message: String },
    /// The launcher fields could not be read (malformed spec file).
    Parse { message: String },
    /// The filesystem write failed. The entry may be partially written.
    Write {
        message: String,
        path: Option<PathBuf>,
    },
    /// No target directory could be resolved for the current user.
    Config { message: String },
}

impl FailureReason {
    /// Process exit code for this failure.
    ///
    /// Codes follow `sysexits.h` where one fits:
    /// - 2: Validation error (bad user input)
    /// - 65: Malformed spec file (`EX_DATAERR`)
    /// - 74: Write error (`EX_IOERR`)
    /// - 78: Configuration error (`EX_CONFIG`)
    pub fn exit_code(&self) -> i32 {
        match self {
            FailureReason::Validation { .. } => 2,
            FailureReason::Parse { .. } => 65,
            FailureReason::Write { .. } => 74,
            FailureReason::Config { .. } => 78,
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Validation { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            FailureReason::Parse { message } => {
                write!(f, "Could not read launcher fields: {}", message)
            }
            FailureReason::Write {
                message,
                path: Some(path),
            } => write!(f, "Failed to write {}: {}", path.display(), message),
            FailureReason::Write { message, path: None } => {
                write!(f, "Failed to write launcher: {}", message)
            }
            FailureReason::Config { message } => write!(f, "Configuration error: {}", message),
        }
    }
}

impl From<DeskgenError> for FailureReason {
    fn from(err: DeskgenError) -> Self {
        match err {
            DeskgenError::Validation { field, message } => {
                FailureReason::Validation { field, message }
            }
            DeskgenError::Json { message, .. } => FailureReason::Parse { message },
            DeskgenError::Io { message, path, .. } => FailureReason::Write { message, path },
            DeskgenError::Config { message } => FailureReason::Config { message },
        }
    }
}

/// Outcome of one generation request, consumed by the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WriteOutcome {
    Success { final_path: PathBuf },
    Failure { reason: FailureReason },
}

impl WriteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, WriteOutcome::Success { .. })
    }

    /// Path of the written entry, if the write succeeded.
    pub fn final_path(&self) -> Option<&Path> {
        match self {
            WriteOutcome::Success { final_path } => Some(final_path),
            WriteOutcome::Failure { .. } => None,
        }
    }

    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            WriteOutcome::Success { .. } => None,
            WriteOutcome::Failure { reason } => Some(reason),
        }
    }

    /// 0 on success, otherwise [`FailureReason::exit_code`].
    pub fn exit_code(&self) -> i32 {
        self.failure().map(FailureReason::exit_code).unwrap_or(0)
    }

    /// One-line confirmation or error text for display.
    pub fn summary(&self) -> String {
        match self {
            WriteOutcome::Success { final_path } => {
                format!("Launcher written to {}", final_path.display())
            }
            WriteOutcome::Failure { reason } => reason.to_string(),
        }
    }
}

impl From<Result<PathBuf>> for WriteOutcome {
    fn from(result: Result<PathBuf>) -> Self {
        match result {
            Ok(final_path) => WriteOutcome::Success { final_path },
            Err(err) => WriteOutcome::Failure {
                reason: err.into(),
            },
        }
    }
}
