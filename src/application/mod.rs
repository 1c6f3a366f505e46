pub mod commands;
pub mod dto;
pub mod error;
pub mod events;
pub mod ports;
pub mod queries;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
