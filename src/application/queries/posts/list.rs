// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{dto::Paginated, error::ApplicationResult},
    domain::post::{Post, specifications::listing},
};

#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub include_drafts: bool,
    pub search: Option<String>,
    /// 1-based; 0 is treated as 1.
    pub page: u64,
    /// 0 selects the configured default.
    pub per_page: u64,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Paginated<Post>> {
        let (page, per_page) = self.limits.normalize(query.page, query.per_page);
        let spec = listing(query.include_drafts, query.search.as_deref()).read_only();

        let total = self.posts.count(&spec).await?;
        let items = self.posts.list(&spec.paginate(page, per_page)).await?;
        Ok(Paginated::new(items, total, page, per_page))
    }
}
