// src/domain/revision/entity.rs
use crate::domain::entity::{Entity, EntityBase};
use crate::domain::errors::DomainError;
use crate::domain::events::{DomainEvent, EntityRef, EventPayload};
use crate::domain::post::{PostContent, PostId};
use crate::domain::revision::value_objects::{RevisionId, RevisionNumber};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Immutable full-content snapshot of a post. Revisions are append-only; no
/// method mutates one after it was recorded.
#[derive(Debug, Clone)]
pub struct Revision {
    base: EntityBase<RevisionId>,
    post_id: PostId,
    author_id: UserId,
    content: PostContent,
    revision_number: RevisionNumber,
}

impl Revision {
    pub fn record(
        post_id: PostId,
        author_id: UserId,
        content: PostContent,
        revision_number: RevisionNumber,
        now: DateTime<Utc>,
    ) -> Self {
        let id = RevisionId::generate();
        let mut revision = Self {
            base: EntityBase::new(id, now),
            post_id,
            author_id,
            content,
            revision_number,
        };
        revision.base.record(DomainEvent::new(
            EntityRef::new(Self::ENTITY_NAME, id),
            Some(author_id),
            EventPayload::RevisionCreated {
                post_id,
                revision_number,
            },
            now,
        ));
        revision
    }

    pub fn rehydrate(
        id: RevisionId,
        post_id: PostId,
        author_id: UserId,
        content: PostContent,
        revision_number: RevisionNumber,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            base: EntityBase::rehydrate(id, created_at, created_at),
            post_id,
            author_id,
            content,
            revision_number,
        }
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }

    /// The editor who produced this snapshot.
    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    pub fn content(&self) -> &PostContent {
        &self.content
    }

    pub fn revision_number(&self) -> RevisionNumber {
        self.revision_number
    }

    /// Returned by stores asked to rewrite or remove a recorded revision.
    pub fn append_only_violation(&self) -> DomainError {
        DomainError::InvalidOperation(format!(
            "revisions are append-only; revision {} cannot be changed",
            self.id()
        ))
    }
}

impl Entity for Revision {
    type Id = RevisionId;
    const ENTITY_NAME: &'static str = "revision";

    fn base(&self) -> &EntityBase<RevisionId> {
        &self.base
    }

    fn base_mut(&mut self) -> &mut EntityBase<RevisionId> {
        &mut self.base
    }
}
