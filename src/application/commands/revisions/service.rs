// src/application/commands/revisions/service.rs
use std::sync::Arc;

use crate::{
    application::{events::EventDispatcher, ports::time::Clock},
    domain::{post::Post, repository::Repository, revision::Revision},
};

pub struct RevisionCommandService {
    pub(super) posts: Arc<dyn Repository<Post>>,
    pub(super) revisions: Arc<dyn Repository<Revision>>,
    pub(super) dispatcher: Arc<EventDispatcher>,
    pub(super) clock: Arc<dyn Clock>,
}

impl RevisionCommandService {
    pub fn new(
        posts: Arc<dyn Repository<Post>>,
        revisions: Arc<dyn Repository<Revision>>,
        dispatcher: Arc<EventDispatcher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            posts,
            revisions,
            dispatcher,
            clock,
        }
    }
}
