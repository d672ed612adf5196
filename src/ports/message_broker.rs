//! MessageBroker port - sends integration messages to named queues.
//!
//! Queues are durable and owned by the consuming context. The sender never
//! waits for the consumer, only for the broker to accept the message.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

#[async_trait]
pub trait MessageBroker: Send + Sync {
    /// Enqueue `message` on `queue`.
    ///
    /// # Errors
    ///
    /// - `BrokerError` if the broker rejects the message
    async fn publish(&self, queue: &str, message: EventEnvelope) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_broker_is_object_safe() {
        fn _accepts_dyn(_broker: &dyn MessageBroker) {}
    }
}
