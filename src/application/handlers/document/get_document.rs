//! GetDocumentHandler - Query handler for a single document.

use std::sync::Arc;

use crate::domain::document::DocumentError;
use crate::domain::foundation::DocumentId;
use crate::ports::{DocumentReader, DocumentView};

/// Query to get a document by ID.
#[derive(Debug, Clone)]
pub struct GetDocumentQuery {
    pub document_id: DocumentId,
}

/// Handler for retrieving documents.
pub struct GetDocumentHandler {
    reader: Arc<dyn DocumentReader>,
}

impl GetDocumentHandler {
    pub fn new(reader: Arc<dyn DocumentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetDocumentQuery) -> Result<DocumentView, DocumentError> {
        self.reader
            .get_by_id(&query.document_id)
            .await?
            .ok_or_else(|| DocumentError::not_found(query.document_id))
    }
}
