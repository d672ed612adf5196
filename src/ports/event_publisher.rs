//! EventPublisher port - releases committed domain events to subscribers.
//!
//! Command handlers call this only after the aggregate has been persisted.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Port for publishing domain events in-process.
///
/// Delivery is at-least-once; subscribers must tolerate duplicates.
///
/// # Example
///
/// ```ignore
/// let envelope = event.to_envelope()?.with_metadata(metadata.to_event_metadata());
/// publisher.publish(envelope).await?;
/// ```
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Publish several events in order.
    ///
    /// Stops at the first failure; earlier events stay published.
    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError>;
}
