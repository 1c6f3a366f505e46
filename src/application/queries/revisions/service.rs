// src/application/queries/revisions/service.rs
use std::sync::Arc;

use crate::domain::{post::Post, repository::Repository, revision::Revision};

pub struct RevisionQueryService {
    pub(super) posts: Arc<dyn Repository<Post>>,
    pub(super) revisions: Arc<dyn Repository<Revision>>,
}

impl RevisionQueryService {
    pub fn new(posts: Arc<dyn Repository<Post>>, revisions: Arc<dyn Repository<Revision>>) -> Self {
        Self { posts, revisions }
    }
}
