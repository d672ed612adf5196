//! IdempotentHandler - skips events a handler has already processed.
//!
//! Wraps any `EventHandler`. The wrapped handler's `name()` namespaces the
//! processed-event records, so two handlers receiving the same event are
//! tracked separately.
//!
//! A failed handle is not recorded, so redelivery retries it. Store errors
//! are propagated.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::{EventHandler, ProcessedEventStore};

/// Decorator that turns at-least-once delivery into effectively-once handling.
///
/// ```ignore
/// let listener = IdempotentHandler::new(sync_listener, processed_events.clone());
/// BrokerConsumer::new(receiver, Arc::new(listener));
/// ```
pub struct IdempotentHandler<H: EventHandler> {
    inner: H,
    processed_events: Arc<dyn ProcessedEventStore>,
}

impl<H: EventHandler> IdempotentHandler<H> {
    pub fn new(inner: H, processed_events: Arc<dyn ProcessedEventStore>) -> Self {
        Self {
            inner,
            processed_events,
        }
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

#[async_trait]
impl<H: EventHandler + 'static> EventHandler for IdempotentHandler<H> {
    async fn handle(&self, envelope: EventEnvelope) -> Result<(), DomainError> {
        let handler_name = self.inner.name();

        if self
            .processed_events
            .contains(&envelope.event_id, handler_name)
            .await?
        {
            tracing::debug!(
                event_id = %envelope.event_id,
                handler = handler_name,
                "skipping duplicate event"
            );
            return Ok(());
        }

        let event_id = envelope.event_id.clone();
        self.inner.handle(envelope).await?;

        self.processed_events
            .mark_processed(&event_id, handler_name)
            .await
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
