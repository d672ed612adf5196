//! CreateDocumentHandler - Command handler for creating documents.

use std::sync::Arc;

use crate::application::handlers::event_commit::commit_events;
use crate::domain::document::{Document, DocumentError, DocumentEvent};
use crate::domain::foundation::{CommandMetadata, DocumentId};
use crate::ports::{DocumentRepository, EventPublisher};

/// Command to create a new document.
#[derive(Debug, Clone)]
pub struct CreateDocumentCommand {
    pub content: String,
}

/// Result of successful document creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateDocumentResult {
    pub document_id: DocumentId,
}

/// Handler for creating documents.
pub struct CreateDocumentHandler {
    repository: Arc<dyn DocumentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateDocumentHandler {
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
        cmd: CreateDocumentCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateDocumentResult, DocumentError> {
        let mut document = Document::create(cmd.content);

        self.repository.persist(&document).await?;

        let events = document.take_events();
        commit_events(
            self.event_publisher.as_ref(),
            events.iter().map(DocumentEvent::to_envelope),
            &metadata,
        )
        .await;

        tracing::info!(document_id = %document.id(), "document created");

        Ok(CreateDocumentResult {
            document_id: document.id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{MockDocumentRepository, RecordingPublisher};
    use crate::domain::document::DOCUMENT_CREATED;

    #[tokio::test]
    async fn persists_document_and_publishes_created_event() {
        let repo = Arc::new(MockDocumentRepository::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let handler = CreateDocumentHandler::new(repo.clone(), publisher.clone());

        let result = handler
            .handle(
                CreateDocumentCommand {
                    content: "hello".to_string(),
                },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        let stored = repo.stored(&result.document_id).unwrap();
        assert_eq!(stored.content(), "hello");
        assert_eq!(publisher.event_types(), vec![DOCUMENT_CREATED.to_string()]);
        assert_eq!(
            publisher.published()[0].metadata.correlation_id.as_deref(),
            Some("test-correlation-id")
        );
    }

    #[tokio::test]
    async fn persist_failure_publishes_nothing() {
        let repo = Arc::new(MockDocumentRepository::new().failing_persist());
        let publisher = Arc::new(RecordingPublisher::new());
        let handler = CreateDocumentHandler::new(repo, publisher.clone());

        let result = handler
            .handle(
                CreateDocumentCommand {
                    content: "hello".to_string(),
                },
                CommandMetadata::test_fixture(),
            )
            .await;

        assert!(matches!(result, Err(DocumentError::Infrastructure(_))));
        assert_eq!(publisher.calls(), 0);
    }
}
