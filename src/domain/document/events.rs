//! Document domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DocumentId, DomainError, EventEnvelope, EventId, SerializableDomainEvent, Timestamp,
};

pub const DOCUMENT_CREATED: &str = "document.created.v1";
pub const DOCUMENT_CONTENT_UPDATED: &str = "document.content_updated.v1";

/// A new document was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCreated {
    pub event_id: EventId,
    pub document_id: DocumentId,
    pub content: String,
    pub created_at: Timestamp,
}

crate::domain_event!(
    DocumentCreated,
    event_type = "document.created.v1",
    schema_version = 1,
    aggregate_id = document_id,
    aggregate_type = "Document",
    occurred_at = created_at,
    event_id = event_id
);

/// A document's content was replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentContentUpdated {
    pub event_id: EventId,
    pub document_id: DocumentId,
    pub content: String,
    pub updated_at: Timestamp,
}

crate::domain_event!(
    DocumentContentUpdated,
    event_type = "document.content_updated.v1",
    schema_version = 1,
    aggregate_id = document_id,
    aggregate_type = "Document",
    occurred_at = updated_at,
    event_id = event_id
);

/// Events recorded by the Document aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    Created(DocumentCreated),
    ContentUpdated(DocumentContentUpdated),
}

impl DocumentEvent {
    /// Routing key of the wrapped event.
    pub fn event_type(&self) -> &'static str {
        match self {
            DocumentEvent::Created(_) => DOCUMENT_CREATED,
            DocumentEvent::ContentUpdated(_) => DOCUMENT_CONTENT_UPDATED,
        }
    }

    /// Wraps the event for the in-process bus.
    pub fn to_envelope(&self) -> Result<EventEnvelope, DomainError> {
        match self {
            DocumentEvent::Created(e) => e.to_envelope(),
            DocumentEvent::ContentUpdated(e) => e.to_envelope(),
        }
    }
}
