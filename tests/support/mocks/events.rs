// tests/support/mocks/events.rs
use std::sync::Mutex;

use async_trait::async_trait;

use folio_core::application::events::EventHandler;
use folio_core::domain::events::{DomainEvent, EventKind};

/// Keeps every event it receives, in delivery order.
#[derive(Default)]
pub struct RecordingHandler {
    seen: Mutex<Vec<DomainEvent>>,
}

impl RecordingHandler {
    pub fn events(&self) -> Vec<DomainEvent> {
        self.seen.lock().unwrap().clone()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events().iter().map(DomainEvent::kind).collect()
    }

    pub fn clear(&self) {
        self.seen.lock().unwrap().clear();
    }
}

#[async_trait]
impl EventHandler for RecordingHandler {
    fn name(&self) -> &str {
        "recording"
    }

    async fn handle(&self, event: &DomainEvent) -> anyhow::Result<()> {
        self.seen.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Fails on every delivery.
pub struct FailingHandler;

#[async_trait]
impl EventHandler for FailingHandler {
    fn name(&self) -> &str {
        "failing"
    }

    async fn handle(&self, event: &DomainEvent) -> anyhow::Result<()> {
        anyhow::bail!("subscriber rejected {}", event.kind())
    }
}
