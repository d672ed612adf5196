//! ContentUpdateForwarder - turns committed content updates into broker messages.
//!
//! The message is written to the outbox addressed to the Contract
//! context's queue. The outbox relay delivers it; this handler never waits
//! on the broker.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::document::DocumentContentUpdated;
use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::domain::integration::DocumentContentUpdatedMessage;
use crate::ports::{EventHandler, OutboxWriter};

/// Forwards `document.content_updated.v1` to the contract queue via the outbox.
pub struct ContentUpdateForwarder {
    outbox: Arc<dyn OutboxWriter>,
    destination: String,
}

impl ContentUpdateForwarder {
    pub fn new(outbox: Arc<dyn OutboxWriter>, destination: impl Into<String>) -> Self {
        Self {
            outbox,
            destination: destination.into(),
        }
    }
}

#[async_trait]
impl EventHandler for ContentUpdateForwarder {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let updated: DocumentContentUpdated = event.payload_as()?;

        let mut message = DocumentContentUpdatedMessage::envelope_for(&updated)?;
        message.metadata = event.metadata.clone();
        let message = message.with_causation_id(event.event_id.as_str());

        let entry = self
            .outbox
            .write(&message, &self.destination, &updated.document_id.to_string())
            .await?;

        tracing::debug!(
            document_id = %updated.document_id,
            outbox_id = %entry.id,
            queue = %self.destination,
            "content update queued for contract context"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ContentUpdateForwarder"
    }
}
