// src/application/commands/posts/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::revisions::RevisionCommandService, error::ApplicationResult,
        events::EventDispatcher, ports::time::Clock,
    },
    domain::{
        post::{Post, PostId, services::PostSlugService},
        repository::Repository,
    },
};

pub struct PostCommandService {
    pub(super) posts: Arc<dyn Repository<Post>>,
    pub(super) revision_commands: Arc<RevisionCommandService>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) dispatcher: Arc<EventDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        posts: Arc<dyn Repository<Post>>,
        revision_commands: Arc<RevisionCommandService>,
        slug_service: Arc<PostSlugService>,
        dispatcher: Arc<EventDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            revision_commands,
            slug_service,
            dispatcher,
            clock,
        }
    }

    pub(super) async fn load(&self, id: PostId) -> ApplicationResult<Post> {
        Ok(self.posts.get_by_id(id).await?)
    }

    /// Persists the post, then publishes and drains its queued events.
    pub(super) async fn commit(&self, mut post: Post) -> ApplicationResult<Post> {
        self.posts.update(&post).await?;
        self.dispatcher.publish_pending(&mut post).await;
        Ok(post)
    }
}
