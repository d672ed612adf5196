//! EventSubscriber port - registration of handlers for event types.
//!
//! The same `EventHandler` trait serves in-process domain event subscribers
//! and the consumers of broker queues.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing events.
///
/// Handlers must be idempotent: the bus and the broker both deliver
/// at-least-once.
///
/// # Example
///
/// ```ignore
/// struct ContractActivityLogger;
///
/// #[async_trait]
/// impl EventHandler for ContractActivityLogger {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         tracing::info!(event_type = %event.event_type, "contract event");
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "ContractActivityLogger"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name, used in logs and as the idempotency key namespace.
    fn name(&self) -> &'static str;
}

/// Port for subscribing handlers to event types.
///
/// # Example
///
/// ```ignore
/// bus.subscribe(DOCUMENT_CONTENT_UPDATED, forwarder);
/// bus.subscribe_all(&[CONTRACT_SIGNED, CONTRACT_BECAME_SIGNABLE], logger);
/// ```
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe the same handler to several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// An event bus both publishes and accepts subscriptions.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
