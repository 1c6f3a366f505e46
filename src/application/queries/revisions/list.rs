// src/application/queries/revisions/list.rs
use super::RevisionQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        post::PostId,
        revision::{Revision, specifications::history_of},
    },
};

#[derive(Debug, Clone, Copy)]
pub struct ListRevisionsQuery {
    pub post_id: PostId,
}

impl RevisionQueryService {
    /// Full history of a post, oldest first.
    pub async fn list_revisions(
        &self,
        query: ListRevisionsQuery,
    ) -> ApplicationResult<Vec<Revision>> {
        self.posts.get_by_id(query.post_id).await?;
        let spec = history_of(query.post_id).read_only();
        Ok(self.revisions.list(&spec).await?)
    }
}
