//! CreateContractHandler - Command handler for creating contracts.

use std::sync::Arc;

use crate::application::handlers::event_commit::commit_events;
use crate::domain::contract::{Contract, ContractError, ContractEvent};
use crate::domain::foundation::{AttachmentId, CommandMetadata, ContractId};
use crate::ports::{ContractRepository, EventPublisher};

/// Command to create a contract over a set of documents.
#[derive(Debug, Clone)]
pub struct CreateContractCommand {
    pub attachment_ids: Vec<String>,
}

/// Result of successful contract creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateContractResult {
    pub contract_id: ContractId,
}

/// Handler for creating contracts.
pub struct CreateContractHandler {
    repository: Arc<dyn ContractRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl CreateContractHandler {
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
        cmd: CreateContractCommand,
        metadata: CommandMetadata,
    ) -> Result<CreateContractResult, ContractError> {
        let attachment_ids = cmd
            .attachment_ids
            .into_iter()
            .map(AttachmentId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let mut contract = Contract::create(attachment_ids);

        self.repository.persist(&contract).await?;

        let events = contract.take_events();
        commit_events(
            self.event_publisher.as_ref(),
            events.iter().map(ContractEvent::to_envelope),
            &metadata,
        )
        .await;

        tracing::info!(
            contract_id = %contract.id(),
            attachments = contract.attachments().len(),
            "contract created"
        );

        Ok(CreateContractResult {
            contract_id: contract.id(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{MockContractRepository, RecordingPublisher};

    fn command(ids: &[&str]) -> CreateContractCommand {
        CreateContractCommand {
            attachment_ids: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn persists_unsigned_contract_with_unseen_attachments() {
        let repo = Arc::new(MockContractRepository::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let handler = CreateContractHandler::new(repo.clone(), publisher.clone());

        let result = handler
            .handle(command(&["d1", "d2", "d1"]), CommandMetadata::test_fixture())
            .await
            .unwrap();

        let stored = repo.stored(&result.contract_id).unwrap();
        assert!(!stored.is_signed());
        assert_eq!(stored.attachments().len(), 2);
        assert!(stored.attachments().iter().all(|a| !a.is_seen()));
        assert!(publisher.published().is_empty());
    }

    #[tokio::test]
    async fn blank_attachment_id_is_rejected_before_persist() {
        let repo = Arc::new(MockContractRepository::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let handler = CreateContractHandler::new(repo.clone(), publisher);

        let result = handler
            .handle(command(&["d1", "  "]), CommandMetadata::test_fixture())
            .await;

        assert!(matches!(result, Err(ContractError::Validation { .. })));
        assert_eq!(repo.persist_count(), 0);
    }
}
