//! Contract query handlers.

use std::sync::Arc;

use crate::domain::contract::ContractError;
use crate::domain::foundation::ContractId;
use crate::ports::{ContractReader, ContractView};

/// Query to get a contract by ID.
#[derive(Debug, Clone)]
pub struct GetContractQuery {
    pub contract_id: ContractId,
}

/// Handler for retrieving a single contract.
pub struct GetContractHandler {
    reader: Arc<dyn ContractReader>,
}

impl GetContractHandler {
    pub fn new(reader: Arc<dyn ContractReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetContractQuery) -> Result<ContractView, ContractError> {
        self.reader
            .get_by_id(&query.contract_id)
            .await?
            .ok_or_else(|| ContractError::not_found(query.contract_id))
    }
}

/// Query for every contract.
#[derive(Debug, Clone, Default)]
pub struct GetAllContractsQuery;

/// Handler for listing contracts.
pub struct GetAllContractsHandler {
    reader: Arc<dyn ContractReader>,
}

impl GetAllContractsHandler {
    pub fn new(reader: Arc<dyn ContractReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        _query: GetAllContractsQuery,
    ) -> Result<Vec<ContractView>, ContractError> {
        Ok(self.reader.list_all().await?)
    }
}
