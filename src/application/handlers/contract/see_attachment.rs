//! SeeAttachmentHandler - Command handler for acknowledging an attachment.

use std::sync::Arc;

use crate::application::handlers::event_commit::commit_events;
use crate::domain::contract::{ContractError, ContractEvent};
use crate::domain::foundation::{AttachmentId, CommandMetadata, ContractId};
use crate::ports::{ContractRepository, EventPublisher};

/// Command to mark an attachment as seen.
#[derive(Debug, Clone)]
pub struct SeeAttachmentCommand {
    pub contract_id: ContractId,
    pub attachment_id: AttachmentId,
}

/// Handler for marking attachments as seen.
pub struct SeeAttachmentHandler {
    repository: Arc<dyn ContractRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SeeAttachmentHandler {
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
        cmd: SeeAttachmentCommand,
        metadata: CommandMetadata,
    ) -> Result<(), ContractError> {
        let mut contract = self.repository.get_by_id(&cmd.contract_id).await?;

        contract.see_attachment(&cmd.attachment_id)?;

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
            "attachment seen"
        );
        Ok(())
    }
}
