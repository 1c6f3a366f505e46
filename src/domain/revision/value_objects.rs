// src/domain/revision/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::specification::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevisionId(Uuid);

impl RevisionId {
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Err(DomainError::Validation("revision id cannot be nil".into()))
        } else {
            Ok(Self(id))
        }
    }

    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<RevisionId> for Uuid {
    fn from(value: RevisionId) -> Self {
        value.0
    }
}

impl From<RevisionId> for Value {
    fn from(value: RevisionId) -> Self {
        Value::Uuid(value.0)
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Per-post sequence number, starting at 1. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevisionNumber(u32);

impl RevisionNumber {
    pub const FIRST: RevisionNumber = RevisionNumber(1);

    pub fn new(value: u32) -> DomainResult<Self> {
        if value == 0 {
            Err(DomainError::Validation(
                "revision numbers start at 1".into(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> DomainResult<Self> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| DomainError::Conflict("revision number overflow".into()))
    }
}

impl TryFrom<i32> for RevisionNumber {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let value = u32::try_from(value)
            .map_err(|_| DomainError::Validation("revision number must be positive".into()))?;
        Self::new(value)
    }
}

impl From<RevisionNumber> for Value {
    fn from(value: RevisionNumber) -> Self {
        Value::Int(i64::from(value.0))
    }
}

impl fmt::Display for RevisionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
