//! In-memory event bus.
//!
//! Delivers each published envelope to the handlers subscribed to its
//! event type, in subscription order, before `publish` returns. Unless
//! built with `without_history`, every envelope is also recorded for
//! inspection.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// In-process event bus.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.subscribe(DOCUMENT_CONTENT_UPDATED, forwarder);
///
/// bus.publish(envelope).await?;
/// assert!(bus.has_event(DOCUMENT_CONTENT_UPDATED));
/// ```
pub struct InMemoryEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    published: RwLock<Vec<EventEnvelope>>,
    record_history: bool,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: RwLock::new(Vec::new()),
            record_history: true,
        }
    }

    /// A bus that only dispatches. Long-running processes use this so the
    /// history does not grow without bound.
    pub fn without_history() -> Self {
        Self {
            record_history: false,
            ..Self::new()
        }
    }

    /// Every envelope published so far, oldest first.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }

    fn handlers_for(&self, event_type: &str) -> Vec<Arc<dyn EventHandler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(event_type)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.record_history {
            self.published
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        }

        // Snapshot so no lock is held across handler awaits.
        let handlers = self.handlers_for(&event.event_type);

        let mut errors = Vec::new();
        for handler in handlers {
            if let Err(e) = handler.handle(event.clone()).await {
                tracing::warn!(
                    handler = handler.name(),
                    event_type = %event.event_type,
                    event_id = %event.event_id,
                    error = %e,
                    "event handler failed"
                );
                errors.push(format!("{}: {}", handler.name(), e));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Handler errors: {}", errors.join(", ")),
            ));
        }

        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.subscribe_all(&[event_type], handler);
    }

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        let mut handlers = self.handlers.write().unwrap_or_else(PoisonError::into_inner);
        for event_type in event_types {
            tracing::debug!(event_type, handler = handler.name(), "handler subscribed");
            handlers
                .entry(event_type.to_string())
                .or_default()
                .push(Arc::clone(&handler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn envelope(event_type: &str, aggregate_id: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, aggregate_id, "Document", json!({}))
    }

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait]
    impl EventHandler for CountingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "CountingHandler"
        }
    }

    struct OrderRecorder {
        label: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl EventHandler for OrderRecorder {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            self.log.lock().unwrap().push(self.label);
            Ok(())
        }
        fn name(&self) -> &'static str {
            "OrderRecorder"
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler for FailingHandler {
        async fn handle(&self, _: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::InternalError, "Handler failed"))
        }
        fn name(&self) -> &'static str {
            "FailingHandler"
        }
    }

    #[tokio::test]
    async fn publish_records_event() {
        let bus = InMemoryEventBus::new();

        bus.publish(envelope("document.created.v1", "d-1")).await.unwrap();

        assert_eq!(bus.event_count(), 1);
        assert!(bus.has_event("document.created.v1"));
        assert_eq!(bus.published_events()[0].aggregate_id, "d-1");
    }

    #[tokio::test]
    async fn only_matching_subscribers_are_invoked() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        bus.subscribe_all(
            &["type.a", "type.b"],
            Arc::new(CountingHandler(counter.clone())),
        );

        bus.publish(envelope("type.a", "1")).await.unwrap();
        bus.publish(envelope("type.b", "2")).await.unwrap();
        bus.publish(envelope("type.c", "3")).await.unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert!(bus.has_event("type.c"));
    }

    #[tokio::test]
    async fn handlers_run_in_subscription_order() {
        let bus = InMemoryEventBus::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        bus.subscribe("t", Arc::new(OrderRecorder { label: "first", log: log.clone() }));
        bus.subscribe("t", Arc::new(OrderRecorder { label: "second", log: log.clone() }));

        bus.publish(envelope("t", "1")).await.unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn failing_handler_does_not_stop_others_but_reports() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(AtomicUsize::new(0));
        bus.subscribe("t", Arc::new(FailingHandler));
        bus.subscribe("t", Arc::new(CountingHandler(counter.clone())));

        let result = bus.publish(envelope("t", "1")).await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(result.unwrap_err().message.contains("FailingHandler"));
    }

    #[tokio::test]
    async fn bus_without_history_still_dispatches() {
        let bus = InMemoryEventBus::without_history();
        let count = Arc::new(AtomicUsize::new(0));
        bus.subscribe(
            "document.created.v1",
            Arc::new(CountingHandler(count.clone())),
        );

        bus.publish(envelope("document.created.v1", "doc-1"))
            .await
            .unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.event_count(), 0);
    }
}
