//! SignContractHandler - Command handler for signing a contract.

use std::sync::Arc;

use crate::application::handlers::event_commit::commit_events;
use crate::domain::contract::{ContractError, ContractEvent};
use crate::domain::foundation::{CommandMetadata, ContractId};
use crate::ports::{ContractRepository, EventPublisher};

/// Command to sign a contract.
#[derive(Debug, Clone)]
pub struct SignContractCommand {
    pub contract_id: ContractId,
}

/// Handler for signing contracts.
pub struct SignContractHandler {
    repository: Arc<dyn ContractRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SignContractHandler {
    pub fn new(
        repository: Arc<dyn ContractRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SignContractCommand,
        metadata: CommandMetadata,
    ) -> Result<(), ContractError> {
        let mut contract = self.repository.get_by_id(&cmd.contract_id).await?;

        contract.sign()?;

        self.repository.persist(&contract).await?;

        let events = contract.take_events();
        commit_events(
            self.event_publisher.as_ref(),
            events.iter().map(ContractEvent::to_envelope),
            &metadata,
        )
        .await;

        tracing::info!(contract_id = %cmd.contract_id, "contract signed");
        Ok(())
    }
}
