//! Application layer errors.
//!
//! These represent orchestration failures: an adapter could not do what was
//! asked of it. "Target path already exists" is deliberately NOT here; an
//! existing file is a per-artifact skip recorded in the report, and the run
//! continues.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur while driving the adapters.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A filesystem write or directory creation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// A framework generator invocation failed.
    #[error("generator failed: {command}: {reason}")]
    Generator { command: String, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check that you are inside the project root".into(),
            ],
            Self::Generator { command, .. } => vec![
                format!("Command failed: {command}"),
                "Ensure the command is installed and runnable from the project root".into(),
            ],
        }
    }
}
