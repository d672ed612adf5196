//! In-memory message broker with named durable queues.
//!
//! A queue is a bounded channel created the first time anyone publishes to
//! it or asks for its receiver, so messages sent before the consumer
//! attaches wait in the queue. Each queue has exactly one consumer.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::MessageBroker;

struct Queue {
    sender: mpsc::Sender<EventEnvelope>,
    receiver: Option<mpsc::Receiver<EventEnvelope>>,
}

/// Process-local broker.
pub struct InMemoryBroker {
    queues: Mutex<HashMap<String, Queue>>,
    capacity: usize,
}

impl InMemoryBroker {
    /// `capacity` bounds each queue; publishers wait while a queue is full.
    pub fn new(capacity: usize) -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Hands out the consuming end of `queue`, creating the queue if needed.
    ///
    /// Returns `None` if the receiver was already taken.
    pub fn take_receiver(&self, queue: &str) -> Option<mpsc::Receiver<EventEnvelope>> {
        let mut queues = self.queues.lock().unwrap_or_else(PoisonError::into_inner);
        self.queue_entry(&mut queues, queue).receiver.take()
    }

    fn sender_for(&self, queue: &str) -> mpsc::Sender<EventEnvelope> {
        let mut queues = self.queues.lock().unwrap_or_else(PoisonError::into_inner);
        self.queue_entry(&mut queues, queue).sender.clone()
    }

    fn queue_entry<'a>(&self, queues: &'a mut HashMap<String, Queue>, name: &str) -> &'a mut Queue {
        queues.entry(name.to_string()).or_insert_with(|| {
            tracing::debug!(queue = name, capacity = self.capacity, "queue declared");
            let (sender, receiver) = mpsc::channel(self.capacity);
            Queue {
                sender,
                receiver: Some(receiver),
            }
        })
    }
}

#[async_trait]
impl MessageBroker for InMemoryBroker {
    async fn publish(&self, queue: &str, message: EventEnvelope) -> Result<(), DomainError> {
        // Lock released before the send can wait on capacity.
        let sender = self.sender_for(queue);
        sender
            .send(message)
            .await
            .map_err(|_| DomainError::broker(format!("Queue {} is closed", queue)))
    }
}
