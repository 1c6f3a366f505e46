// src/application/queries/posts/service.rs
use std::sync::Arc;

use crate::{
    application::dto::PageLimits,
    domain::{post::Post, repository::Repository},
};

pub struct PostQueryService {
    pub(super) posts: Arc<dyn Repository<Post>>,
    pub(super) limits: PageLimits,
}

impl PostQueryService {
    pub fn new(posts: Arc<dyn Repository<Post>>, limits: PageLimits) -> Self {
        Self { posts, limits }
    }
}
