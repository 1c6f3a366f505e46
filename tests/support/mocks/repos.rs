// tests/support/mocks/repos.rs
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use folio_core::domain::entity::Entity;
use folio_core::domain::errors::DomainResult;
use folio_core::domain::post::PostContent;
use folio_core::domain::repository::Repository;
use folio_core::domain::revision::{Revision, RevisionId};
use folio_core::domain::specification::Specification;
use folio_core::domain::user::UserId;

/// Simulates a second writer: once armed, the next `add` is preceded by a
/// rival revision carrying the same number.
pub struct RacingRevisionRepository {
    inner: Arc<dyn Repository<Revision>>,
    armed: AtomicBool,
}

impl RacingRevisionRepository {
    pub fn new(inner: Arc<dyn Repository<Revision>>) -> Self {
        Self {
            inner,
            armed: AtomicBool::new(false),
        }
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl Repository<Revision> for RacingRevisionRepository {
    async fn get_by_id(&self, id: RevisionId) -> DomainResult<Revision> {
        self.inner.get_by_id(id).await
    }

    async fn list(&self, spec: &Specification<Revision>) -> DomainResult<Vec<Revision>> {
        self.inner.list(spec).await
    }

    async fn first(&self, spec: &Specification<Revision>) -> DomainResult<Revision> {
        self.inner.first(spec).await
    }

    async fn count(&self, spec: &Specification<Revision>) -> DomainResult<u64> {
        self.inner.count(spec).await
    }

    async fn add(&self, revision: Revision) -> DomainResult<Revision> {
        if self.armed.swap(false, Ordering::SeqCst) {
            let rival = Revision::record(
                revision.post_id(),
                UserId::generate(),
                PostContent::new("rival edit")?,
                revision.revision_number(),
                revision.created_at(),
            );
            self.inner.add(rival).await?;
        }
        self.inner.add(revision).await
    }

    async fn update(&self, revision: &Revision) -> DomainResult<()> {
        self.inner.update(revision).await
    }

    async fn delete(&self, revision: &Revision) -> DomainResult<()> {
        self.inner.delete(revision).await
    }
}
