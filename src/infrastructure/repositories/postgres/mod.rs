// src/infrastructure/repositories/postgres/mod.rs
mod error;
mod pool;
mod post;
mod query;
mod revision;

pub use error::map_sqlx;
pub use pool::PgStore;
pub use post::PostgresPostRepository;
pub use query::{SqlTable, count_query, select_query};
pub use revision::PostgresRevisionRepository;
