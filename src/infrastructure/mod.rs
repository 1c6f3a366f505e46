// src/infrastructure/mod.rs
pub mod audit;
pub mod repositories;
pub mod telemetry;
pub mod time;
pub mod util;

use std::sync::Arc;

use tracing::info;

use crate::application::ports::time::Clock;
use crate::config::AppConfig;
use crate::domain::errors::DomainResult;
use crate::domain::post::Post;
use crate::domain::repository::Repository;
use crate::domain::revision::Revision;
use repositories::{
    MemoryRepository, MemoryStore, PgStore, PostgresPostRepository, PostgresRevisionRepository,
};

/// The repositories a process works with, behind the generic contract.
#[derive(Clone)]
pub struct Repositories {
    pub posts: Arc<dyn Repository<Post>>,
    pub revisions: Arc<dyn Repository<Revision>>,
}

impl Repositories {
    pub fn in_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            posts: Arc::new(MemoryRepository::<Post>::new(Arc::clone(&store))),
            revisions: Arc::new(MemoryRepository::<Revision>::new(store)),
        }
    }

    pub fn postgres(store: PgStore) -> Self {
        Self {
            posts: Arc::new(PostgresPostRepository::new(store.clone())),
            revisions: Arc::new(PostgresRevisionRepository::new(store)),
        }
    }
}

/// Picks the store from configuration: Postgres when `DATABASE_URL` is set,
/// otherwise a fresh in-memory store stamped by `clock`.
pub async fn build_repositories(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> DomainResult<Repositories> {
    if config.database_url().is_some() {
        let store = PgStore::connect(config).await?;
        info!(backend = "postgres", "repositories ready");
        Ok(Repositories::postgres(store))
    } else {
        info!(backend = "memory", "repositories ready");
        Ok(Repositories::in_memory(Arc::new(MemoryStore::new(clock))))
    }
}
