// src/domain/entity.rs
use crate::domain::events::DomainEvent;
use chrono::{DateTime, Utc};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use uuid::Uuid;

/// Lifecycle of the pending event queue carried by an entity instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventQueueState {
    Empty,
    Accumulating,
    Drained,
}

/// Identity, audit timestamps and pending events shared by every persisted
/// entity. Embedded by value; entities expose it through [`Entity`].
#[derive(Debug, Clone)]
pub struct EntityBase<Id> {
    id: Id,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    events: Vec<DomainEvent>,
    drained: bool,
}

impl<Id: Copy> EntityBase<Id> {
    pub fn new(id: Id, now: DateTime<Utc>) -> Self {
        Self::rehydrate(id, now, now)
    }

    /// Rebuilds the base of an entity loaded from storage. Loaded entities
    /// start with an empty event queue.
    pub fn rehydrate(id: Id, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            events: Vec::new(),
            drained: false,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn pending_events(&self) -> &[DomainEvent] {
        &self.events
    }

    pub fn queue_state(&self) -> EventQueueState {
        match (self.events.is_empty(), self.drained) {
            (false, _) => EventQueueState::Accumulating,
            (true, true) => EventQueueState::Drained,
            (true, false) => EventQueueState::Empty,
        }
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub(crate) fn record(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    /// Persistence-layer timestamp defaults applied on insert.
    pub(crate) fn stamp(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }

    /// Called once the queued events were handed to the dispatcher.
    pub(crate) fn mark_drained(&mut self) {
        self.events.clear();
        self.drained = true;
    }

    /// Drops queued events without publishing them; used when the write they
    /// describe never committed and for the copy kept inside a store.
    pub(crate) fn discard_events(&mut self) {
        self.events.clear();
    }
}

pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + Into<Uuid> + 'static;

    /// Stable name used in logs, event references and error messages.
    const ENTITY_NAME: &'static str;

    fn base(&self) -> &EntityBase<Self::Id>;

    fn base_mut(&mut self) -> &mut EntityBase<Self::Id>;

    fn id(&self) -> Self::Id {
        self.base().id()
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.base().created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.base().updated_at()
    }

    fn pending_events(&self) -> &[DomainEvent] {
        self.base().pending_events()
    }
}
