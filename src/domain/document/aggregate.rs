//! Document aggregate - freely editable content that ages out.
//!
//! Content may be replaced until one calendar year has passed since the
//! document was created. The boundary is inclusive: an update at exactly
//! `created_at + 1 year` is accepted.

use crate::domain::foundation::{DocumentId, EventId, Timestamp};

use super::{DocumentContentUpdated, DocumentCreated, DocumentError, DocumentEvent};

/// Years a document stays editable after creation.
pub const CONTENT_UPDATE_WINDOW_YEARS: u32 = 1;

/// The Document aggregate root.
#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    content: String,
    created_at: Timestamp,
    updated_at: Timestamp,
    domain_events: Vec<DocumentEvent>,
}

impl Document {
    /// Creates a new document with fresh id and both timestamps set to now.
    pub fn create(content: impl Into<String>) -> Self {
        Self::create_at(content, Timestamp::now())
    }

    /// Creates a new document as of `now`.
    pub fn create_at(content: impl Into<String>, now: Timestamp) -> Self {
        let id = DocumentId::new();
        let content = content.into();

        let mut document = Self {
            id,
            content: content.clone(),
            created_at: now,
            updated_at: now,
            domain_events: Vec::new(),
        };

        document.record_event(DocumentEvent::Created(DocumentCreated {
            event_id: EventId::new(),
            document_id: id,
            content,
            created_at: now,
        }));

        document
    }

    /// Reconstitutes a document from persisted data without recording events.
    pub fn reconstitute(
        id: DocumentId,
        content: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            content,
            created_at,
            updated_at,
            domain_events: Vec::new(),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Last moment at which content may still be replaced.
    pub fn editable_until(&self) -> Timestamp {
        self.created_at.plus_years(CONTENT_UPDATE_WINDOW_YEARS)
    }

    /// Replaces the content as of the current time.
    ///
    /// # Errors
    ///
    /// - `TooOldForContentUpdate` if more than one year has passed since creation
    pub fn update_content(&mut self, content: impl Into<String>) -> Result<(), DocumentError> {
        self.update_content_at(content, Timestamp::now())
    }

    /// Replaces the content as of `now`.
    ///
    /// Leaves state and pending events untouched on failure.
    pub fn update_content_at(
        &mut self,
        content: impl Into<String>,
        now: Timestamp,
    ) -> Result<(), DocumentError> {
        if now.is_after(&self.editable_until()) {
            return Err(DocumentError::too_old_for_content_update(self.id));
        }

        let content = content.into();
        self.content = content.clone();
        self.updated_at = now;

        self.record_event(DocumentEvent::ContentUpdated(DocumentContentUpdated {
            event_id: EventId::new(),
            document_id: self.id,
            content,
            updated_at: now,
        }));

        Ok(())
    }

    /// Pending events, oldest first.
    pub fn pending_events(&self) -> &[DocumentEvent] {
        &self.domain_events
    }

    /// Drains pending events. Call only after the document has been persisted.
    pub fn take_events(&mut self) -> Vec<DocumentEvent> {
        std::mem::take(&mut self.domain_events)
    }

    fn record_event(&mut self, event: DocumentEvent) {
        self.domain_events.push(event);
    }
}
