//! UpdateDocumentContentHandler - Command handler for replacing content.
//!
//! Load, mutate, persist, then publish. A rejected update is never
//! persisted and publishes nothing.

use std::sync::Arc;

use crate::application::handlers::event_commit::commit_events;
use crate::domain::document::{DocumentError, DocumentEvent};
use crate::domain::foundation::{CommandMetadata, DocumentId};
use crate::ports::{DocumentRepository, EventPublisher};

/// Command to replace a document's content.
#[derive(Debug, Clone)]
pub struct UpdateDocumentContentCommand {
    pub document_id: DocumentId,
    pub content: String,
}

/// Handler for updating document content.
pub struct UpdateDocumentContentHandler {
    repository: Arc<dyn DocumentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UpdateDocumentContentHandler {
    pub fn new(
        repository: Arc<dyn DocumentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateDocumentContentCommand,
        metadata: CommandMetadata,
    ) -> Result<(), DocumentError> {
        let mut document = self.repository.get_by_id(&cmd.document_id).await?;

        document.update_content(cmd.content)?;

        self.repository.persist(&document).await?;

        let events = document.take_events();
        commit_events(
            self.event_publisher.as_ref(),
            events.iter().map(DocumentEvent::to_envelope),
            &metadata,
        )
        .await;

        tracing::info!(document_id = %cmd.document_id, "document content updated");
        Ok(())
    }
}
