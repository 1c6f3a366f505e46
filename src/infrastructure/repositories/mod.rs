pub mod memory;
pub mod postgres;

pub use memory::{MemoryRepository, MemoryStore};
pub use postgres::{PgStore, PostgresPostRepository, PostgresRevisionRepository, map_sqlx};
