//! Document-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode};

/// Document-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Document was not found.
    #[error("Document not found: {0}")]
    NotFound(DocumentId),

    /// Document is older than the content-update window.
    #[error("Document {0} is too old for content update")]
    TooOldForContentUpdate(DocumentId),

    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl DocumentError {
    pub fn not_found(id: DocumentId) -> Self {
        DocumentError::NotFound(id)
    }

    pub fn too_old_for_content_update(id: DocumentId) -> Self {
        DocumentError::TooOldForContentUpdate(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        DocumentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DocumentError::NotFound(_) => ErrorCode::DocumentNotFound,
            DocumentError::TooOldForContentUpdate(_) => ErrorCode::DocumentTooOldForContentUpdate,
            DocumentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for DocumentError {
    fn from(err: DomainError) -> Self {
        DocumentError::Infrastructure(err.to_string())
    }
}
