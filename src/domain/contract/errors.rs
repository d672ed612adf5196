//! Contract-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AttachmentId, ContractId, DomainError, ErrorCode, ValidationError};

/// Contract-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Contract was not found.
    #[error("Contract not found: {0}")]
    NotFound(ContractId),

    /// Contract has no attachment with the given id.
    #[error("Attachment {attachment_id} not found on contract {contract_id}")]
    AttachmentNotFound {
        contract_id: ContractId,
        attachment_id: AttachmentId,
    },

    /// At least one attachment has not been seen.
    #[error("Cannot sign contract {0} with unseen attachments")]
    CannotSignWithUnseenAttachments(ContractId),

    /// Signed contracts keep every attachment seen.
    #[error("Cannot unsee attachment of signed contract {0}")]
    CannotUnseeAttachmentOfSignedContract(ContractId),

    /// Input failed validation.
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ContractError {
    pub fn not_found(id: ContractId) -> Self {
        ContractError::NotFound(id)
    }

    pub fn attachment_not_found(contract_id: ContractId, attachment_id: AttachmentId) -> Self {
        ContractError::AttachmentNotFound {
            contract_id,
            attachment_id,
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ContractError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ContractError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ContractError::NotFound(_) => ErrorCode::ContractNotFound,
            ContractError::AttachmentNotFound { .. } => ErrorCode::AttachmentNotFound,
            ContractError::CannotSignWithUnseenAttachments(_) => {
                ErrorCode::ContractHasUnseenAttachments
            }
            ContractError::CannotUnseeAttachmentOfSignedContract(_) => {
                ErrorCode::ContractAlreadySigned
            }
            ContractError::Validation { .. } => ErrorCode::ValidationFailed,
            ContractError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<DomainError> for ContractError {
    fn from(err: DomainError) -> Self {
        ContractError::Infrastructure(err.to_string())
    }
}

impl From<ValidationError> for ContractError {
    fn from(err: ValidationError) -> Self {
        ContractError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_variants() {
        let id = ContractId::new();
        let attachment = AttachmentId::new("a1").unwrap();

        assert_eq!(ContractError::not_found(id).code(), ErrorCode::ContractNotFound);
        assert_eq!(
            ContractError::attachment_not_found(id, attachment).code(),
            ErrorCode::AttachmentNotFound
        );
        assert_eq!(
            ContractError::CannotSignWithUnseenAttachments(id).code(),
            ErrorCode::ContractHasUnseenAttachments
        );
        assert_eq!(
            ContractError::CannotUnseeAttachmentOfSignedContract(id).code(),
            ErrorCode::ContractAlreadySigned
        );
        assert_eq!(ContractError::validation("x", "y").code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn validation_error_keeps_field_name() {
        let err: ContractError = ValidationError::empty_field("attachment_id").into();
        assert!(matches!(err, ContractError::Validation { field, .. } if field == "attachment_id"));
    }
}
