//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The drafting domain has exactly one failure class: a draft that does not
/// pass export-time validation. Every such failure is recoverable by editing
/// the draft and re-submitting; nothing here is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The draft violated an export-time validation rule.
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// The human-readable reason, exactly as shown to the user.
    pub fn reason(&self) -> &str {
        match self {
            Self::Validation(msg) => msg,
        }
    }
}
