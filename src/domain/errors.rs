// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

/// Coarse outward classification used by callers that translate errors into
/// transport responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    BadRequest,
    Unavailable,
}

impl DomainError {
    /// Store outages are the only failures a caller may retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Infrastructure(_))
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            DomainError::NotFound(_) => ErrorClass::NotFound,
            DomainError::Validation(_)
            | DomainError::Conflict(_)
            | DomainError::InvalidOperation(_) => ErrorClass::BadRequest,
            DomainError::Infrastructure(_) => ErrorClass::Unavailable,
        }
    }
}
