// src/infrastructure/audit.rs
use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use crate::application::events::{EventDispatcher, EventHandler};
use crate::domain::events::{DomainEvent, EventKind};

/// Writes every event it receives to the `audit` tracing target as JSON.
#[derive(Debug, Default, Clone)]
pub struct TracingAuditHandler;

impl TracingAuditHandler {
    /// Subscribes a shared instance to every event kind.
    pub fn register(dispatcher: &mut EventDispatcher) {
        dispatcher.subscribe_all(&EventKind::ALL, std::sync::Arc::new(Self));
    }
}

#[async_trait]
impl EventHandler for TracingAuditHandler {
    fn name(&self) -> &str {
        "tracing-audit"
    }

    async fn handle(&self, event: &DomainEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(event.payload())
            .with_context(|| format!("serialising {} payload", event.kind()))?;
        info!(
            target: "audit",
            event_id = %event.id(),
            kind = %event.kind(),
            entity = %event.entity(),
            actor = ?event.actor_id().map(|id| id.to_string()),
            occurred_at = %event.occurred_at(),
            payload = %payload,
            "domain event"
        );
        Ok(())
    }
}
