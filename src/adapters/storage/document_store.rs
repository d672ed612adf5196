//! Store-backed Document repository and reader.
//!
//! Documents are kept as `DocumentModel` records with ISO-8601 timestamps.
//! `persist` rewrites `updated_at` with the time of the call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::document::Document;
use crate::domain::foundation::{DocumentId, DomainError, ErrorCode, Timestamp};
use crate::ports::{DocumentReader, DocumentRepository, DocumentView, Store};

/// Storage representation of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentModel {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl DocumentModel {
    fn from_aggregate(document: &Document, updated_at: Timestamp) -> Self {
        Self {
            id: document.id().to_string(),
            content: document.content().to_string(),
            created_at: document.created_at().to_iso8601(),
            updated_at: updated_at.to_iso8601(),
        }
    }

    fn into_aggregate(self) -> Result<Document, DomainError> {
        let id = self.id.parse::<DocumentId>().map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Invalid stored document id {}: {}", self.id, e),
            )
        })?;
        let created_at = Timestamp::parse_iso8601(&self.created_at)?;
        let updated_at = Timestamp::parse_iso8601(&self.updated_at)?;
        Ok(Document::reconstitute(id, self.content, created_at, updated_at))
    }

    fn into_view(self, id: DocumentId) -> DocumentView {
        DocumentView {
            id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Document repository over any `Store`.
pub struct StoreDocumentRepository {
    store: Arc<dyn Store<DocumentId, DocumentModel>>,
}

impl StoreDocumentRepository {
    pub fn new(store: Arc<dyn Store<DocumentId, DocumentModel>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DocumentRepository for StoreDocumentRepository {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, DomainError> {
        self.store
            .get(id)
            .await?
            .map(DocumentModel::into_aggregate)
            .transpose()
    }

    async fn persist(&self, document: &Document) -> Result<(), DomainError> {
        let model = DocumentModel::from_aggregate(document, Timestamp::now());
        self.store.set(document.id(), model).await
    }
}

#[async_trait]
impl DocumentReader for StoreDocumentRepository {
    async fn get_by_id(&self, id: &DocumentId) -> Result<Option<DocumentView>, DomainError> {
        Ok(self.store.get(id).await?.map(|model| model.into_view(*id)))
    }
}
