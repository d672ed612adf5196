//! Contract reader port (read side / queries).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AttachmentId, ContractId, DomainError};

/// Reader port for contract queries.
#[async_trait]
pub trait ContractReader: Send + Sync {
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &ContractId) -> Result<Option<ContractView>, DomainError>;

    /// Every contract, oldest first.
    async fn list_all(&self) -> Result<Vec<ContractView>, DomainError>;
}

/// Contract as returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractView {
    pub id: ContractId,
    pub is_signed: bool,
    pub created_at: String,
    pub updated_at: String,
    pub attachments: Vec<AttachmentView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentView {
    pub id: AttachmentId,
    pub is_seen: bool,
}
