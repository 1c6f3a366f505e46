// src/application/queries/posts/get.rs
use super::PostQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        post::{
            Post, PostField, PostId, PostRelation, PostSlug,
            specifications::not_deleted,
        },
        specification::{Criteria, Specification},
    },
};

#[derive(Debug, Clone, Copy)]
pub struct GetPostQuery {
    pub id: PostId,
    pub include_revisions: bool,
    pub include_author: bool,
}

impl GetPostQuery {
    pub fn by_id(id: PostId) -> Self {
        Self {
            id,
            include_revisions: false,
            include_author: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetPostBySlugQuery {
    pub slug: String,
    pub include_revisions: bool,
}

impl PostQueryService {
    /// Loads a live post. Deleted posts are reported as not found.
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<Post> {
        let mut spec =
            Specification::matching(Criteria::eq(PostField::Id, query.id).and(not_deleted()))
                .read_only();
        if query.include_revisions {
            spec = spec.include(PostRelation::Revisions);
        }
        if query.include_author {
            spec = spec.include(PostRelation::Author);
        }
        Ok(self.posts.first(&spec).await?)
    }

    pub async fn get_post_by_slug(&self, query: GetPostBySlugQuery) -> ApplicationResult<Post> {
        let slug = PostSlug::new(query.slug)?;
        let mut spec = Specification::matching(
            Criteria::eq(PostField::Slug, slug.as_str()).and(not_deleted()),
        )
        .read_only();
        if query.include_revisions {
            spec = spec.include(PostRelation::Revisions);
        }
        Ok(self.posts.first(&spec).await?)
    }
}
