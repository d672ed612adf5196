//! BrokerConsumer - drives one queue into an `EventHandler`.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};

use crate::domain::foundation::EventEnvelope;
use crate::ports::EventHandler;

/// Receives messages from a queue and hands each to a handler.
///
/// Handler errors are logged; the message is considered consumed.
pub struct BrokerConsumer {
    queue: String,
    receiver: mpsc::Receiver<EventEnvelope>,
    handler: Arc<dyn EventHandler>,
}

impl BrokerConsumer {
    pub fn new(
        queue: impl Into<String>,
        receiver: mpsc::Receiver<EventEnvelope>,
        handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            queue: queue.into(),
            receiver,
            handler,
        }
    }

    /// Consumes until shutdown is signalled or every sender is gone.
    ///
    /// Returns the number of messages delivered to the handler.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> u64 {
        let mut delivered = 0u64;
        tracing::info!(queue = %self.queue, handler = self.handler.name(), "consumer started");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }

                message = self.receiver.recv() => {
                    let Some(message) = message else { break };
                    self.deliver(message).await;
                    delivered += 1;
                }
            }
        }

        tracing::info!(queue = %self.queue, delivered, "consumer stopped");
        delivered
    }

    async fn deliver(&self, message: EventEnvelope) {
        let event_id = message.event_id.clone();
        let pattern = message.event_type.clone();

        if let Err(e) = self.handler.handle(message).await {
            tracing::error!(
                queue = %self.queue,
                handler = self.handler.name(),
                event_id = %event_id,
                pattern = %pattern,
                error = %e,
                "message handling failed"
            );
        }
    }
}
