//! Document reader port (read side / queries).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DocumentId, DomainError};

/// Reader port for document queries.
#[async_trait]
pub trait DocumentReader: Send + Sync {
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &DocumentId) -> Result<Option<DocumentView>, DomainError>;
}

/// Document as returned to API clients.
///
/// Timestamps are the ISO-8601 strings held by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub id: DocumentId,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}
