// src/domain/events.rs
use crate::domain::post::PostId;
use crate::domain::revision::{RevisionId, RevisionNumber};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Routing key for subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    PostCreated,
    PostContentChanged,
    PostRetitled,
    PostPublished,
    PostUnpublished,
    PostDeleted,
    PostRestored,
    RevisionCreated,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::PostCreated,
        EventKind::PostContentChanged,
        EventKind::PostRetitled,
        EventKind::PostPublished,
        EventKind::PostUnpublished,
        EventKind::PostDeleted,
        EventKind::PostRestored,
        EventKind::RevisionCreated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PostCreated => "post.created",
            EventKind::PostContentChanged => "post.content_changed",
            EventKind::PostRetitled => "post.retitled",
            EventKind::PostPublished => "post.published",
            EventKind::PostUnpublished => "post.unpublished",
            EventKind::PostDeleted => "post.deleted",
            EventKind::PostRestored => "post.restored",
            EventKind::RevisionCreated => "revision.created",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntityRef {
    pub entity_type: &'static str,
    pub id: Uuid,
}

impl EntityRef {
    pub fn new(entity_type: &'static str, id: impl Into<Uuid>) -> Self {
        Self {
            entity_type,
            id: id.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}

/// The materially changed fields of one mutation. Carries old and new values
/// so subscribers never need to reload the entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    PostCreated {
        title: String,
        slug: String,
        etag: String,
    },
    PostContentChanged {
        old_content: String,
        new_content: String,
        old_etag: String,
        new_etag: String,
    },
    PostRetitled {
        old_title: String,
        new_title: String,
        old_slug: String,
        new_slug: String,
    },
    PostPublished {
        published_at: DateTime<Utc>,
    },
    PostUnpublished,
    PostDeleted {
        deleted_at: DateTime<Utc>,
    },
    PostRestored {
        revision_id: RevisionId,
        revision_number: RevisionNumber,
        old_content: String,
        restored_content: String,
    },
    RevisionCreated {
        post_id: PostId,
        revision_number: RevisionNumber,
    },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::PostCreated { .. } => EventKind::PostCreated,
            EventPayload::PostContentChanged { .. } => EventKind::PostContentChanged,
            EventPayload::PostRetitled { .. } => EventKind::PostRetitled,
            EventPayload::PostPublished { .. } => EventKind::PostPublished,
            EventPayload::PostUnpublished => EventKind::PostUnpublished,
            EventPayload::PostDeleted { .. } => EventKind::PostDeleted,
            EventPayload::PostRestored { .. } => EventKind::PostRestored,
            EventPayload::RevisionCreated { .. } => EventKind::RevisionCreated,
        }
    }
}

/// Immutable record of something that happened to an entity.
#[derive(Debug, Clone, Serialize)]
pub struct DomainEvent {
    id: Uuid,
    kind: EventKind,
    entity: EntityRef,
    actor_id: Option<UserId>,
    payload: EventPayload,
    occurred_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn new(
        entity: EntityRef,
        actor_id: Option<UserId>,
        payload: EventPayload,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            kind: payload.kind(),
            entity,
            actor_id,
            payload,
            occurred_at,
        }
    }

    /// Unique per event; subscribers use it to stay idempotent.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn entity(&self) -> EntityRef {
        self.entity
    }

    pub fn actor_id(&self) -> Option<UserId> {
        self.actor_id
    }

    pub fn payload(&self) -> &EventPayload {
        &self.payload
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
