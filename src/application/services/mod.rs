// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{posts::PostCommandService, revisions::RevisionCommandService},
        dto::PageLimits,
        events::EventDispatcher,
        ports::{time::Clock, util::SlugGenerator},
        queries::{posts::PostQueryService, revisions::RevisionQueryService},
    },
    domain::{
        post::{Post, services::PostSlugService},
        repository::Repository,
        revision::Revision,
    },
};

/// Every use case, wired against one pair of repositories and one
/// dispatcher.
pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub revision_commands: Arc<RevisionCommandService>,
    pub revision_queries: Arc<RevisionQueryService>,
    dispatcher: Arc<EventDispatcher>,
}

impl ApplicationServices {
    pub fn new(
        posts: Arc<dyn Repository<Post>>,
        revisions: Arc<dyn Repository<Revision>>,
        dispatcher: Arc<EventDispatcher>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        limits: PageLimits,
    ) -> Self {
        let revision_commands = Arc::new(RevisionCommandService::new(
            Arc::clone(&posts),
            Arc::clone(&revisions),
            Arc::clone(&dispatcher),
            Arc::clone(&clock),
        ));

        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&posts),
            slugger,
            Arc::clone(&clock),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&posts),
            Arc::clone(&revision_commands),
            slug_service,
            Arc::clone(&dispatcher),
            clock,
        ));

        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&posts), limits));
        let revision_queries = Arc::new(RevisionQueryService::new(posts, revisions));

        Self {
            post_commands,
            post_queries,
            revision_commands,
            revision_queries,
            dispatcher,
        }
    }

    pub fn dispatcher(&self) -> Arc<EventDispatcher> {
        Arc::clone(&self.dispatcher)
    }
}
