//! UnseeAttachmentHandler - Command handler for invalidating an acknowledgement.
//!
//! Issued once per unsigned contract when a referenced document changes,
//! so it is best-effort: a contract without the attachment is left alone
//! and the command still succeeds.

use std::sync::Arc;

use crate::application::handlers::event_commit::commit_events;
use crate::domain::contract::{ContractError, ContractEvent};
use crate::domain::foundation::{AttachmentId, CommandMetadata, ContractId};
use crate::ports::{ContractRepository, EventPublisher};

/// Command to mark an attachment as unseen.
#[derive(Debug, Clone)]
pub struct UnseeAttachmentCommand {
    pub contract_id: ContractId,
    pub attachment_id: AttachmentId,
}

/// Outcome of a successful unsee command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnseeAttachmentOutcome {
    /// The contract references the attachment and was persisted.
    Applied,
    /// The contract does not reference the attachment.
    NotReferenced,
}

/// Handler for marking attachments as unseen.
pub struct UnseeAttachmentHandler {
    repository: Arc<dyn ContractRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UnseeAttachmentHandler {
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
        cmd: UnseeAttachmentCommand,
        metadata: CommandMetadata,
    ) -> Result<UnseeAttachmentOutcome, ContractError> {
        let mut contract = self.repository.get_by_id(&cmd.contract_id).await?;

        if !contract.has_attachment_with_id(&cmd.attachment_id) {
            return Ok(UnseeAttachmentOutcome::NotReferenced);
        }

        contract.unsee_attachment(&cmd.attachment_id)?;

        self.repository.persist(&contract).await?;

        let events = contract.take_events();
        commit_events(
            self.event_publisher.as_ref(),
            events.iter().map(ContractEvent::to_envelope),
            &metadata,
        )
        .await;

        tracing::info!(
            contract_id = %cmd.contract_id,
            attachment_id = %cmd.attachment_id,
            "attachment unseen"
        );
        Ok(UnseeAttachmentOutcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{MockContractRepository, RecordingPublisher};
    use crate::domain::contract::{Contract, CONTRACT_BECAME_UNSIGNABLE};

    fn aid(s: &str) -> AttachmentId {
        AttachmentId::new(s).unwrap()
    }

    fn seen_contract(ids: &[&str]) -> Contract {
        let mut contract = Contract::create(ids.iter().map(|s| aid(s)));
        for id in ids {
            contract.see_attachment(&aid(id)).unwrap();
        }
        contract
    }

    fn handler_for(
        contract: Contract,
    ) -> (Arc<MockContractRepository>, Arc<RecordingPublisher>, UnseeAttachmentHandler) {
        let repo = Arc::new(MockContractRepository::with_contracts([contract]));
        let publisher = Arc::new(RecordingPublisher::new());
        let handler = UnseeAttachmentHandler::new(repo.clone(), publisher.clone());
        (repo, publisher, handler)
    }

    #[tokio::test]
    async fn seen_attachment_becomes_unseen_and_publishes_unsignable() {
        let contract = seen_contract(&["d1", "d2"]);
        let id = contract.id();
        let (repo, publisher, handler) = handler_for(contract);

        let outcome = handler
            .handle(
                UnseeAttachmentCommand { contract_id: id, attachment_id: aid("d1") },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, UnseeAttachmentOutcome::Applied);
        assert!(!repo.stored(&id).unwrap().all_attachments_seen());
        assert_eq!(publisher.event_types(), vec![CONTRACT_BECAME_UNSIGNABLE.to_string()]);
    }

    #[tokio::test]
    async fn missing_attachment_is_a_silent_noop() {
        let contract = seen_contract(&["d1"]);
        let id = contract.id();
        let (repo, publisher, handler) = handler_for(contract);

        let outcome = handler
            .handle(
                UnseeAttachmentCommand { contract_id: id, attachment_id: aid("other") },
                CommandMetadata::test_fixture(),
            )
            .await
            .unwrap();

        assert_eq!(outcome, UnseeAttachmentOutcome::NotReferenced);
        assert_eq!(repo.persist_count(), 0);
        assert_eq!(publisher.calls(), 0);
    }

    #[tokio::test]
    async fn signed_contract_rejects_unsee() {
        let mut contract = seen_contract(&["d1"]);
        contract.sign().unwrap();
        let id = contract.id();
        let (repo, _publisher, handler) = handler_for(contract);

        let result = handler
            .handle(
                UnseeAttachmentCommand { contract_id: id, attachment_id: aid("d1") },
                CommandMetadata::test_fixture(),
            )
            .await;

        assert_eq!(result, Err(ContractError::CannotUnseeAttachmentOfSignedContract(id)));
        assert_eq!(repo.persist_count(), 0);
        assert!(repo.stored(&id).unwrap().is_signed());
    }

    #[tokio::test]
    async fn repeated_unsee_publishes_once() {
        let contract = seen_contract(&["d1"]);
        let id = contract.id();
        let (_repo, publisher, handler) = handler_for(contract);
        let cmd = UnseeAttachmentCommand { contract_id: id, attachment_id: aid("d1") };

        handler.handle(cmd.clone(), CommandMetadata::test_fixture()).await.unwrap();
        handler.handle(cmd, CommandMetadata::test_fixture()).await.unwrap();

        assert_eq!(publisher.event_types().len(), 1);
    }
}
