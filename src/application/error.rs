// src/application/error.rs
use crate::domain::errors::{DomainError, ErrorClass};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            ApplicationError::Domain(err) => err.class(),
            ApplicationError::NotFound(_) => ErrorClass::NotFound,
            ApplicationError::Validation(_)
            | ApplicationError::Conflict(_)
            | ApplicationError::InvalidOperation(_) => ErrorClass::BadRequest,
            ApplicationError::Infrastructure(_) => ErrorClass::Unavailable,
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ApplicationError::Conflict(_) | ApplicationError::Domain(DomainError::Conflict(_))
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_))
        )
    }
}
