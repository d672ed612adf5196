//! Document repository port (write side).

use async_trait::async_trait;

use crate::domain::document::{Document, DocumentError};
use crate::domain::foundation::{DocumentId, DomainError};

/// Repository port for Document aggregate persistence.
///
/// `persist` upserts. Implementations stamp the stored `updated_at` with
/// the time of the call.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Find a document by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, DomainError>;

    /// Insert or replace a document.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn persist(&self, document: &Document) -> Result<(), DomainError>;

    /// Load a document or fail with `DocumentError::NotFound`.
    async fn get_by_id(&self, id: &DocumentId) -> Result<Document, DocumentError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DocumentError::not_found(*id))
    }
}
