//! Contract repository port (write side).

use async_trait::async_trait;

use crate::domain::contract::{Contract, ContractError};
use crate::domain::foundation::{ContractId, DomainError};

/// Repository port for Contract aggregate persistence.
#[async_trait]
pub trait ContractRepository: Send + Sync {
    /// Find a contract by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ContractId) -> Result<Option<Contract>, DomainError>;

    /// Insert or replace a contract, stamping the stored `updated_at`.
    async fn persist(&self, contract: &Contract) -> Result<(), DomainError>;

    /// IDs of every contract that is not signed yet.
    ///
    /// Used only to fan out cross-context updates. An empty list is normal.
    async fn find_all_unsigned_ids(&self) -> Result<Vec<ContractId>, DomainError>;

    /// Load a contract or fail with `ContractError::NotFound`.
    async fn get_by_id(&self, id: &ContractId) -> Result<Contract, ContractError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| ContractError::not_found(*id))
    }
}
