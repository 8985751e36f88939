use thiserror::Error;

/// Domain-level validation errors.
///
/// These cover model-name validation only; everything downstream of a valid
/// name either succeeds or is reported as a skip, never as a domain error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("invalid model name '{name}': {reason}")]
    InvalidModelName { name: String, reason: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyModelName => vec![
                "Provide a model name, e.g. 'post' or 'category'".into(),
                "The name is lower-cased and singularized automatically".into(),
            ],
            Self::InvalidModelName { reason, .. } => vec![
                format!("Model name rejected: {reason}"),
                "Use a plain word without path separators, e.g. 'tag'".into(),
            ],
        }
    }
}
