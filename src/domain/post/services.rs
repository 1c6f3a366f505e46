// src/domain/post/services.rs
use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::application::ports::util::SlugGenerator;
use crate::domain::entity::Entity;
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::Post;
use crate::domain::post::specifications::with_slug;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};
use crate::domain::repository::Repository;

const MAX_SLUG_CHARS: usize = 80;

/// Domain service responsible for producing unique slugs for posts.
pub struct PostSlugService {
    posts: Arc<dyn Repository<Post>>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
}

impl PostSlugService {
    pub fn new(
        posts: Arc<dyn Repository<Post>>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            generator,
            clock,
        }
    }

    /// Titles that slugify to nothing fall back to `post-<unix seconds>`.
    pub async fn generate_unique_slug(
        &self,
        title: &PostTitle,
        ignore_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base = self.generator.slugify_bounded(title.as_str(), MAX_SLUG_CHARS);
        let base_slug = if base.is_empty() {
            format!("post-{}", self.clock.now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = PostSlug::new(candidate.clone())?;
            match self.posts.list(&with_slug(&slug)).await?.first() {
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id()) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{}-{}", base_slug, counter);
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
