// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod events;
pub mod repos;
pub mod time;

pub use events::{FailingHandler, RecordingHandler};
pub use repos::RacingRevisionRepository;
pub use time::fixed_now;
