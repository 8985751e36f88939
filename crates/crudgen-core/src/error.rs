//! Unified error handling for Crudgen Core.
//!
//! One root type wraps the domain and application errors so callers get a
//! single surface with category and suggestion accessors.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Crudgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum Error {
    /// Model-name validation failed.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An adapter (filesystem or generator) failed.
    #[error("application error: {0}")]
    Application(#[from] ApplicationError),
}

impl Error {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Category for display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(_) => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type Result<T> = std::result::Result<T, Error>;
