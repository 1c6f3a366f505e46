// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of "now" for audit timestamps and event occurrence times.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
