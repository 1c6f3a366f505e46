// src/infrastructure/repositories/postgres/revision.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::{PgStore, SqlTable, count_query, map_sqlx, select_query};
use crate::domain::entity::Entity;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{PostContent, PostId};
use crate::domain::repository::Repository;
use crate::domain::revision::{Revision, RevisionId, RevisionNumber};
use crate::domain::specification::Specification;
use crate::domain::user::UserId;

pub(super) const REVISION_COLUMNS: &str =
    "id, post_id, author_id, content, revision_number, created_at";

impl SqlTable for Revision {
    const TABLE: &'static str = "post_revisions";
    const COLUMNS: &'static str = REVISION_COLUMNS;
}

#[derive(Debug, FromRow)]
pub(super) struct RevisionRow {
    id: Uuid,
    post_id: Uuid,
    author_id: Uuid,
    content: String,
    revision_number: i32,
    created_at: DateTime<Utc>,
}

impl TryFrom<RevisionRow> for Revision {
    type Error = DomainError;

    fn try_from(row: RevisionRow) -> Result<Self, Self::Error> {
        Ok(Revision::rehydrate(
            RevisionId::new(row.id)?,
            PostId::new(row.post_id)?,
            UserId::new(row.author_id)?,
            PostContent::new(row.content)?,
            RevisionNumber::try_from(row.revision_number)?,
            row.created_at,
        ))
    }
}

#[derive(Clone)]
pub struct PostgresRevisionRepository {
    store: PgStore,
}

impl PostgresRevisionRepository {
    pub fn new(store: PgStore) -> Self {
        Self { store }
    }
}

fn number_column(number: RevisionNumber) -> DomainResult<i32> {
    i32::try_from(number.value())
        .map_err(|_| DomainError::Validation("revision number exceeds column range".into()))
}

#[async_trait]
impl Repository<Revision> for PostgresRevisionRepository {
    async fn get_by_id(&self, id: RevisionId) -> DomainResult<Revision> {
        let row = sqlx::query_as::<_, RevisionRow>(&format!(
            "SELECT {REVISION_COLUMNS} FROM post_revisions WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(self.store.pool(false))
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("revision {id} not found")))?;

        Revision::try_from(row)
    }

    async fn list(&self, spec: &Specification<Revision>) -> DomainResult<Vec<Revision>> {
        let mut query = select_query(spec)?;
        let rows = query
            .build_query_as::<RevisionRow>()
            .fetch_all(self.store.pool(spec.is_read_only()))
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Revision::try_from).collect()
    }

    async fn first(&self, spec: &Specification<Revision>) -> DomainResult<Revision> {
        self.list(spec)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound("no revision matches the query".into()))
    }

    async fn count(&self, spec: &Specification<Revision>) -> DomainResult<u64> {
        let spec = spec.count_only();
        let mut query = count_query(&spec);
        let total: i64 = query
            .build_query_scalar()
            .fetch_one(self.store.pool(spec.is_read_only()))
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn add(&self, revision: Revision) -> DomainResult<Revision> {
        sqlx::query(
            "INSERT INTO post_revisions (id, post_id, author_id, content, revision_number, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(revision.id().as_uuid())
        .bind(revision.post_id().as_uuid())
        .bind(revision.author_id().as_uuid())
        .bind(revision.content().as_str())
        .bind(number_column(revision.revision_number())?)
        .bind(revision.created_at())
        .execute(self.store.pool(false))
        .await
        .map_err(map_sqlx)?;

        Ok(revision)
    }

    async fn update(&self, revision: &Revision) -> DomainResult<()> {
        Err(revision.append_only_violation())
    }

    async fn delete(&self, revision: &Revision) -> DomainResult<()> {
        Err(revision.append_only_violation())
    }
}
