//! Post history core for a blog platform: query specifications evaluated by
//! pluggable stores, generic repositories, deferred domain events, and
//! revision snapshots with symmetric text diffs.

pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use bootstrap::bootstrap;
pub use config::{AppConfig, ConfigError};
