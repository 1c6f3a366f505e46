// src/infrastructure/repositories/memory/store.rs
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;
use tracing::warn;

use crate::application::ports::time::Clock;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{Post, PostId};
use crate::domain::revision::{Revision, RevisionId};
use crate::domain::user::{UserId, UserSummary};

/// Process-local store with one table per entity type.
///
/// Data is lost when the store is dropped. The availability switch makes
/// every repository call fail with `Infrastructure`, the same way a dropped
/// database connection would.
pub struct MemoryStore {
    pub(super) posts: RwLock<HashMap<PostId, Post>>,
    pub(super) revisions: RwLock<HashMap<RevisionId, Revision>>,
    pub(super) users: RwLock<HashMap<UserId, UserSummary>>,
    pub(super) clock: Arc<dyn Clock>,
    available: AtomicBool,
}

impl MemoryStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            revisions: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
            clock,
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        if !available {
            warn!("memory store switched to unavailable");
        }
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Registers an account so posts can eager-load it as their author.
    pub async fn insert_user(&self, user: UserSummary) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn post_count(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn revision_count(&self) -> usize {
        self.revisions.read().await.len()
    }

    pub async fn clear(&self) {
        self.posts.write().await.clear();
        self.revisions.write().await.clear();
        self.users.write().await.clear();
    }

    pub(super) fn ensure_available(&self) -> DomainResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(DomainError::Infrastructure("memory store is unavailable".into()))
        }
    }
}
