//! Store-backed Contract repository and reader.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::contract::{Attachment, Contract};
use crate::domain::foundation::{AttachmentId, ContractId, DomainError, ErrorCode, Timestamp};
use crate::ports::{AttachmentView, ContractReader, ContractRepository, ContractView, Store};

/// Storage representation of a contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractModel {
    pub id: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_signed: bool,
    pub attachments: Vec<AttachmentModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentModel {
    pub id: String,
    pub is_seen: bool,
}

impl ContractModel {
    fn from_aggregate(contract: &Contract, updated_at: Timestamp) -> Self {
        Self {
            id: contract.id().to_string(),
            created_at: contract.created_at().to_iso8601(),
            updated_at: updated_at.to_iso8601(),
            is_signed: contract.is_signed(),
            attachments: contract
                .attachments()
                .iter()
                .map(|a| AttachmentModel {
                    id: a.id().as_str().to_string(),
                    is_seen: a.is_seen(),
                })
                .collect(),
        }
    }

    fn contract_id(&self) -> Result<ContractId, DomainError> {
        self.id.parse::<ContractId>().map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Invalid stored contract id {}: {}", self.id, e),
            )
        })
    }

    fn into_aggregate(self) -> Result<Contract, DomainError> {
        let id = self.contract_id()?;
        let attachments = self
            .attachments
            .into_iter()
            .map(|a| Ok(Attachment::reconstitute(AttachmentId::new(a.id)?, a.is_seen)))
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Contract::reconstitute(
            id,
            Timestamp::parse_iso8601(&self.created_at)?,
            Timestamp::parse_iso8601(&self.updated_at)?,
            self.is_signed,
            attachments,
        ))
    }

    fn into_view(self) -> Result<ContractView, DomainError> {
        let id = self.contract_id()?;
        let attachments = self
            .attachments
            .into_iter()
            .map(|a| {
                Ok(AttachmentView {
                    id: AttachmentId::new(a.id)?,
                    is_seen: a.is_seen,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(ContractView {
            id,
            is_signed: self.is_signed,
            created_at: self.created_at,
            updated_at: self.updated_at,
            attachments,
        })
    }
}

/// Contract repository over any `Store`.
pub struct StoreContractRepository {
    store: Arc<dyn Store<ContractId, ContractModel>>,
}

impl StoreContractRepository {
    pub fn new(store: Arc<dyn Store<ContractId, ContractModel>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContractRepository for StoreContractRepository {
    async fn find_by_id(&self, id: &ContractId) -> Result<Option<Contract>, DomainError> {
        self.store
            .get(id)
            .await?
            .map(ContractModel::into_aggregate)
            .transpose()
    }

    async fn persist(&self, contract: &Contract) -> Result<(), DomainError> {
        let model = ContractModel::from_aggregate(contract, Timestamp::now());
        self.store.set(contract.id(), model).await
    }

    /// Undecodable models are logged and skipped.
    async fn find_all_unsigned_ids(&self) -> Result<Vec<ContractId>, DomainError> {
        Ok(self
            .store
            .values()
            .await?
            .iter()
            .filter(|model| !model.is_signed)
            .filter_map(|model| match model.contract_id() {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(
                        stored_id = %model.id,
                        error = %e,
                        "skipping unreadable contract"
                    );
                    None
                }
            })
            .collect())
    }
}

#[async_trait]
impl ContractReader for StoreContractRepository {
    async fn get_by_id(&self, id: &ContractId) -> Result<Option<ContractView>, DomainError> {
        self.store
            .get(id)
            .await?
            .map(ContractModel::into_view)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<ContractView>, DomainError> {
        let mut models = self.store.values().await?;
        models.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        models.into_iter().map(ContractModel::into_view).collect()
    }
}
