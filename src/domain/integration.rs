//! Integration messages exchanged between contexts over the broker.
//!
//! These are wire contracts: the payload shape is fixed and versioned
//! independently of the in-process domain events.

use serde::{Deserialize, Serialize};

use super::document::DocumentContentUpdated;
use super::foundation::{DocumentId, EventEnvelope, Timestamp};

/// Pattern name of the message sent when a document's content changes.
pub const DOCUMENT_CONTENT_UPDATED: &str = "document-content-updated";

/// Payload of `document-content-updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentContentUpdatedMessage {
    pub document_id: DocumentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl DocumentContentUpdatedMessage {
    pub fn new(document_id: DocumentId) -> Self {
        Self {
            document_id,
            content: None,
            updated_at: None,
        }
    }

    /// Builds the message envelope, keeping the domain event's id so that
    /// redelivery of the same update deduplicates downstream.
    pub fn envelope_for(event: &DocumentContentUpdated) -> Result<EventEnvelope, serde_json::Error> {
        let message = Self {
            document_id: event.document_id,
            content: Some(event.content.clone()),
            updated_at: Some(event.updated_at),
        };
        let mut envelope = message.into_envelope()?;
        envelope.event_id = event.event_id.clone();
        envelope.occurred_at = event.updated_at;
        Ok(envelope)
    }

    pub fn into_envelope(self) -> Result<EventEnvelope, serde_json::Error> {
        let aggregate_id = self.document_id.to_string();
        let payload = serde_json::to_value(&self)?;
        Ok(EventEnvelope::new(
            DOCUMENT_CONTENT_UPDATED,
            aggregate_id,
            "Document",
            payload,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::EventId;
    use serde_json::json;

    #[test]
    fn payload_uses_camel_case_document_id() {
        let id = DocumentId::new();
        let envelope = DocumentContentUpdatedMessage::new(id).into_envelope().unwrap();

        assert_eq!(envelope.event_type, DOCUMENT_CONTENT_UPDATED);
        assert_eq!(envelope.payload, json!({ "documentId": id.to_string() }));
    }

    #[test]
    fn minimal_payload_parses() {
        let id = DocumentId::new();
        let message: DocumentContentUpdatedMessage =
            serde_json::from_value(json!({ "documentId": id.to_string() })).unwrap();

        assert_eq!(message, DocumentContentUpdatedMessage::new(id));
    }

    #[test]
    fn envelope_for_domain_event_keeps_event_id() {
        let event = DocumentContentUpdated {
            event_id: EventId::from_string("evt-1"),
            document_id: DocumentId::new(),
            content: "B".to_string(),
            updated_at: Timestamp::now(),
        };

        let envelope = DocumentContentUpdatedMessage::envelope_for(&event).unwrap();
        let message: DocumentContentUpdatedMessage = envelope.payload_as().unwrap();

        assert_eq!(envelope.event_id.as_str(), "evt-1");
        assert_eq!(message.document_id, event.document_id);
        assert_eq!(message.content.as_deref(), Some("B"));
    }
}
