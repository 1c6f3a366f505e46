// src/application/events/dispatcher.rs
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::entity::Entity;
use crate::domain::events::{DomainEvent, EntityRef, EventKind};

/// Subscriber for one or more event kinds. Delivery is at-most-once per
/// publish and may be partial, so handlers must be idempotent (the event id
/// is stable for that purpose).
#[async_trait]
pub trait EventHandler: Send + Sync {
    fn name(&self) -> &str;

    async fn handle(&self, event: &DomainEvent) -> anyhow::Result<()>;
}

#[derive(Debug, Error)]
#[error("handler '{handler}' failed on {kind} for {entity}: {message}")]
pub struct HandlerFailure {
    pub handler: String,
    pub kind: EventKind,
    pub entity: EntityRef,
    pub event_id: Uuid,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct DispatchReport {
    pub events: usize,
    pub deliveries: usize,
    pub failures: Vec<HandlerFailure>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Explicit registry from event kind to its ordered handlers.
#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: Arc<dyn EventHandler>) -> &mut Self {
        self.handlers.entry(kind).or_default().push(handler);
        self
    }

    pub fn subscribe_all(
        &mut self,
        kinds: &[EventKind],
        handler: Arc<dyn EventHandler>,
    ) -> &mut Self {
        for kind in kinds {
            self.subscribe(*kind, Arc::clone(&handler));
        }
        self
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Delivers each event, in order, to every handler registered for its
    /// kind. A failing handler is logged and skipped; it never stops the
    /// remaining deliveries.
    pub async fn publish(&self, events: &[DomainEvent]) -> DispatchReport {
        let mut report = DispatchReport {
            events: events.len(),
            ..DispatchReport::default()
        };

        for event in events {
            let Some(handlers) = self.handlers.get(&event.kind()) else {
                continue;
            };
            for handler in handlers {
                match handler.handle(event).await {
                    Ok(()) => report.deliveries += 1,
                    Err(err) => {
                        tracing::warn!(
                            handler = handler.name(),
                            event_kind = %event.kind(),
                            entity = %event.entity(),
                            event_id = %event.id(),
                            error = %err,
                            "event handler failed"
                        );
                        report.failures.push(HandlerFailure {
                            handler: handler.name().to_string(),
                            kind: event.kind(),
                            entity: event.entity(),
                            event_id: event.id(),
                            message: format!("{err:#}"),
                        });
                    }
                }
            }
        }

        tracing::debug!(
            events = report.events,
            deliveries = report.deliveries,
            failures = report.failures.len(),
            "domain events published"
        );
        report
    }

    /// Publishes the entity's queued events and then drains its queue. Call
    /// only after the repository write that produced them has returned.
    pub async fn publish_pending<E: Entity>(&self, entity: &mut E) -> DispatchReport {
        let report = self.publish(entity.pending_events()).await;
        entity.base_mut().mark_drained();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::EventQueueState;
    use crate::domain::post::{Post, PostContent, PostSlug, PostTitle};
    use crate::domain::user::UserId;
    use anyhow::anyhow;
    use chrono::Utc;
    use std::sync::Mutex;

    struct Recorder {
        name: &'static str,
        seen: Mutex<Vec<EventKind>>,
        fail: bool,
    }

    impl Recorder {
        fn new(name: &'static str, fail: bool) -> Arc<Self> {
            Arc::new(Self {
                name,
                seen: Mutex::new(Vec::new()),
                fail,
            })
        }

        fn seen(&self) -> Vec<EventKind> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EventHandler for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        async fn handle(&self, event: &DomainEvent) -> anyhow::Result<()> {
            self.seen.lock().unwrap().push(event.kind());
            if self.fail {
                Err(anyhow!("subscriber unavailable"))
            } else {
                Ok(())
            }
        }
    }

    fn post() -> Post {
        Post::create(
            UserId::generate(),
            PostTitle::new("Title").unwrap(),
            PostSlug::new("title").unwrap(),
            PostContent::new("body").unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn failing_handler_does_not_block_others() {
        let broken = Recorder::new("broken", true);
        let healthy = Recorder::new("healthy", false);
        let mut dispatcher = EventDispatcher::new();
        dispatcher
            .subscribe(EventKind::PostCreated, broken.clone())
            .subscribe(EventKind::PostCreated, healthy.clone())
            .subscribe(EventKind::PostPublished, healthy.clone());

        let mut post = post();
        post.publish(post.author_id(), Utc::now()).unwrap();
        let report = dispatcher.publish_pending(&mut post).await;

        assert_eq!(report.events, 2);
        assert_eq!(report.deliveries, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].handler, "broken");
        assert_eq!(
            healthy.seen(),
            vec![EventKind::PostCreated, EventKind::PostPublished]
        );
        assert_eq!(broken.seen(), vec![EventKind::PostCreated]);
    }

    #[tokio::test]
    async fn second_publish_is_a_noop() {
        let recorder = Recorder::new("recorder", false);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.subscribe(EventKind::PostCreated, recorder.clone());

        let mut post = post();
        dispatcher.publish_pending(&mut post).await;
        assert_eq!(post.base().queue_state(), EventQueueState::Drained);

        let report = dispatcher.publish_pending(&mut post).await;
        assert_eq!(report.events, 0);
        assert_eq!(recorder.seen().len(), 1);
    }

    #[tokio::test]
    async fn events_without_subscribers_are_dropped_quietly() {
        let dispatcher = EventDispatcher::new();
        let mut post = post();
        let report = dispatcher.publish_pending(&mut post).await;
        assert!(report.is_clean());
        assert_eq!(report.deliveries, 0);
        assert_eq!(dispatcher.handler_count(EventKind::PostCreated), 0);
    }
}
