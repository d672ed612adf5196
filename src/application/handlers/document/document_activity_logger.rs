//! DocumentActivityLogger - logs committed document events.

use async_trait::async_trait;

use crate::domain::document::{DOCUMENT_CONTENT_UPDATED, DOCUMENT_CREATED};
use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

/// Writes one structured log line per committed document event.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentActivityLogger;

impl DocumentActivityLogger {
    /// Event types this logger subscribes to.
    pub const EVENT_TYPES: [&'static str; 2] = [DOCUMENT_CREATED, DOCUMENT_CONTENT_UPDATED];

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler for DocumentActivityLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        match event.event_type.as_str() {
            DOCUMENT_CREATED => {
                tracing::info!(document_id = %event.aggregate_id, "document created event committed");
            }
            DOCUMENT_CONTENT_UPDATED => {
                tracing::info!(
                    document_id = %event.aggregate_id,
                    occurred_at = %event.occurred_at,
                    "document content updated event committed"
                );
            }
            other => {
                tracing::debug!(event_type = other, "ignoring non-document event");
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "DocumentActivityLogger"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn accepts_every_event_type() {
        let logger = DocumentActivityLogger::new();

        for event_type in DocumentActivityLogger::EVENT_TYPES.iter().chain(["other.v1"].iter()) {
            let envelope = EventEnvelope::new(*event_type, "doc-1", "Document", json!({}));
            assert!(logger.handle(envelope).await.is_ok());
        }
    }
}
