// src/infrastructure/repositories/postgres/post.rs
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::debug;
use uuid::Uuid;

use super::revision::{REVISION_COLUMNS, RevisionRow};
use super::{PgStore, SqlTable, count_query, map_sqlx, select_query};
use crate::domain::entity::Entity;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    Post, PostContent, PostId, PostRelation, PostSlug, PostStatus, PostTitle,
};
use crate::domain::repository::Repository;
use crate::domain::revision::Revision;
use crate::domain::specification::Specification;
use crate::domain::user::{UserId, UserSummary};

const POST_COLUMNS: &str = "id, author_id, title, slug, content, status, published_at, deleted_at, created_at, updated_at";

impl SqlTable for Post {
    const TABLE: &'static str = "posts";
    const COLUMNS: &'static str = POST_COLUMNS;
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    author_id: Uuid,
    title: String,
    slug: String,
    content: String,
    status: String,
    published_at: Option<DateTime<Utc>>,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post::rehydrate(
            PostId::new(row.id)?,
            UserId::new(row.author_id)?,
            PostTitle::new(row.title)?,
            PostSlug::new(row.slug)?,
            PostContent::new(row.content)?,
            row.status.parse::<PostStatus>()?,
            row.published_at,
            row.deleted_at,
            row.created_at,
            row.updated_at,
        ))
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: Uuid,
    username: String,
    display_name: Option<String>,
}

impl TryFrom<AuthorRow> for UserSummary {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        let summary = UserSummary::new(UserId::new(row.id)?, row.username)?;
        Ok(match row.display_name {
            Some(name) => summary.with_display_name(name),
            None => summary,
        })
    }
}

#[derive(Clone)]
pub struct PostgresPostRepository {
    store: PgStore,
}

impl PostgresPostRepository {
    pub fn new(store: PgStore) -> Self {
        Self { store }
    }

    /// One `= ANY($1)` query per requested relation, whatever the row count.
    async fn attach(
        &self,
        posts: &mut [Post],
        includes: &[PostRelation],
        read_only: bool,
    ) -> DomainResult<()> {
        if posts.is_empty() {
            return Ok(());
        }
        let pool = self.store.pool(read_only);

        for relation in includes {
            match relation {
                PostRelation::Revisions => {
                    let ids: Vec<Uuid> = posts.iter().map(|post| post.id().as_uuid()).collect();
                    let rows = sqlx::query_as::<_, RevisionRow>(&format!(
                        "SELECT {REVISION_COLUMNS} FROM post_revisions
                         WHERE post_id = ANY($1) ORDER BY post_id, revision_number"
                    ))
                    .bind(ids)
                    .fetch_all(pool)
                    .await
                    .map_err(map_sqlx)?;

                    let mut grouped: HashMap<PostId, Vec<Revision>> = HashMap::new();
                    for row in rows {
                        let revision = Revision::try_from(row)?;
                        grouped.entry(revision.post_id()).or_default().push(revision);
                    }
                    for post in posts.iter_mut() {
                        post.attach_revisions(grouped.remove(&post.id()).unwrap_or_default());
                    }
                }
                PostRelation::Author => {
                    let ids: Vec<Uuid> =
                        posts.iter().map(|post| post.author_id().as_uuid()).collect();
                    let rows = sqlx::query_as::<_, AuthorRow>(
                        "SELECT id, username, display_name FROM users WHERE id = ANY($1)",
                    )
                    .bind(ids)
                    .fetch_all(pool)
                    .await
                    .map_err(map_sqlx)?;

                    let mut authors = HashMap::new();
                    for row in rows {
                        let author = UserSummary::try_from(row)?;
                        authors.insert(author.id, author);
                    }
                    for post in posts.iter_mut() {
                        post.attach_author(authors.get(&post.author_id()).cloned());
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Post> for PostgresPostRepository {
    async fn get_by_id(&self, id: PostId) -> DomainResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(self.store.pool(false))
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("post {id} not found")))?;

        Post::try_from(row)
    }

    async fn list(&self, spec: &Specification<Post>) -> DomainResult<Vec<Post>> {
        let mut query = select_query(spec)?;
        debug!(sql = query.sql(), "post list");
        let rows = query
            .build_query_as::<PostRow>()
            .fetch_all(self.store.pool(spec.is_read_only()))
            .await
            .map_err(map_sqlx)?;

        let mut posts = rows
            .into_iter()
            .map(Post::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        if !spec.includes().is_empty() {
            self.attach(&mut posts, spec.includes(), spec.is_read_only())
                .await?;
        }
        Ok(posts)
    }

    async fn first(&self, spec: &Specification<Post>) -> DomainResult<Post> {
        self.list(spec)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::NotFound("no post matches the query".into()))
    }

    async fn count(&self, spec: &Specification<Post>) -> DomainResult<u64> {
        let spec = spec.count_only();
        let mut query = count_query(&spec);
        let total: i64 = query
            .build_query_scalar()
            .fetch_one(self.store.pool(spec.is_read_only()))
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn add(&self, post: Post) -> DomainResult<Post> {
        sqlx::query(
            "INSERT INTO posts (id, author_id, title, slug, content, status, published_at, deleted_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(post.id().as_uuid())
        .bind(post.author_id().as_uuid())
        .bind(post.title().as_str())
        .bind(post.slug().as_str())
        .bind(post.content().as_str())
        .bind(post.status().as_str())
        .bind(post.published_at())
        .bind(post.deleted_at())
        .bind(post.created_at())
        .bind(post.updated_at())
        .execute(self.store.pool(false))
        .await
        .map_err(map_sqlx)?;

        Ok(post)
    }

    async fn update(&self, post: &Post) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE posts SET title = $2, slug = $3, content = $4, status = $5,
                 published_at = $6, deleted_at = $7, updated_at = $8
             WHERE id = $1",
        )
        .bind(post.id().as_uuid())
        .bind(post.title().as_str())
        .bind(post.slug().as_str())
        .bind(post.content().as_str())
        .bind(post.status().as_str())
        .bind(post.published_at())
        .bind(post.deleted_at())
        .bind(post.updated_at())
        .execute(self.store.pool(false))
        .await
        .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("post {} not found", post.id())));
        }
        Ok(())
    }

    async fn delete(&self, post: &Post) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post.id().as_uuid())
            .execute(self.store.pool(false))
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("post {} not found", post.id())));
        }
        Ok(())
    }
}
