// src/infrastructure/repositories/postgres/pool.rs
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use super::map_sqlx;
use crate::config::AppConfig;
use crate::domain::errors::{DomainError, DomainResult};

/// Primary pool plus the pool that serves read-only specifications. Without
/// a replica both are the same pool.
#[derive(Clone)]
pub struct PgStore {
    primary: PgPool,
    replica: PgPool,
}

impl PgStore {
    pub fn new(primary: PgPool, replica: Option<PgPool>) -> Self {
        let replica = replica.unwrap_or_else(|| primary.clone());
        Self { primary, replica }
    }

    pub async fn connect(config: &AppConfig) -> DomainResult<Self> {
        let primary_url = config.database_url().ok_or_else(|| {
            DomainError::InvalidOperation("DATABASE_URL is not configured".into())
        })?;
        let primary = init_pool(primary_url, config.database_max_connections()).await?;

        let replica = match config.database_read_url() {
            Some(url) if url != primary_url => {
                Some(init_pool(url, config.database_max_connections()).await?)
            }
            _ => None,
        };

        info!(read_replica = replica.is_some(), "postgres pools ready");
        Ok(Self::new(primary, replica))
    }

    pub(super) fn pool(&self, read_only: bool) -> &PgPool {
        if read_only {
            &self.replica
        } else {
            &self.primary
        }
    }
}

async fn init_pool(database_url: &str, max_connections: u32) -> DomainResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(map_sqlx)
}
