// src/infrastructure/repositories/memory/mod.rs
mod repository;
mod store;
mod tables;

pub use repository::{MemoryRepository, StoredEntity};
pub use store::MemoryStore;
