//! AttachmentSyncListener - keeps attachment acknowledgements in step with documents.
//!
//! Consumes `document-content-updated` from the contract queue and issues
//! one `UnseeAttachmentCommand` per unsigned contract. The listener does not
//! know which contracts reference the document, so contracts without the
//! attachment are skipped by the command itself.
//!
//! Dispatches run as a bounded concurrent group on a spawned task. The
//! listener acknowledges the message as soon as the group is started; one
//! slow or failing contract never holds up the others.

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use tokio::task::JoinHandle;

use crate::domain::foundation::{AttachmentId, CommandMetadata, ContractId, DomainError, EventEnvelope};
use crate::domain::integration::{DocumentContentUpdatedMessage, DOCUMENT_CONTENT_UPDATED};
use crate::ports::{ContractRepository, EventHandler};

use super::{UnseeAttachmentCommand, UnseeAttachmentHandler, UnseeAttachmentOutcome};

/// Tally of one fan-out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutReport {
    /// Commands issued, one per unsigned contract.
    pub dispatched: usize,
    /// Contracts that referenced the document and were updated or already unseen.
    pub applied: usize,
    /// Contracts that do not reference the document.
    pub skipped: usize,
    pub failed: usize,
}

/// Broker listener for document content updates.
pub struct AttachmentSyncListener {
    contract_repository: Arc<dyn ContractRepository>,
    unsee_handler: Arc<UnseeAttachmentHandler>,
    max_concurrent: usize,
}

impl AttachmentSyncListener {
    pub fn new(
        contract_repository: Arc<dyn ContractRepository>,
        unsee_handler: Arc<UnseeAttachmentHandler>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            contract_repository,
            unsee_handler,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Starts the fan-out for one message and returns its task.
    ///
    /// # Errors
    ///
    /// - `SerializationError` if the payload is not a content-update message
    /// - `DatabaseError` if unsigned contracts cannot be listed
    pub async fn dispatch(
        &self,
        message: &EventEnvelope,
    ) -> Result<JoinHandle<FanOutReport>, DomainError> {
        let update: DocumentContentUpdatedMessage = message.payload_as()?;
        let attachment_id = AttachmentId::from(update.document_id);

        let contract_ids = self.contract_repository.find_all_unsigned_ids().await?;

        let correlation_id = message
            .metadata
            .correlation_id
            .clone()
            .unwrap_or_else(|| message.event_id.to_string());
        let metadata = CommandMetadata::new()
            .with_correlation_id(correlation_id)
            .with_causation_id(message.event_id.as_str())
            .with_source("broker");

        tracing::info!(
            document_id = %update.document_id,
            contracts = contract_ids.len(),
            "dispatching attachment unsee to unsigned contracts"
        );

        Ok(tokio::spawn(fan_out(
            self.unsee_handler.clone(),
            contract_ids,
            attachment_id,
            metadata,
            self.max_concurrent,
        )))
    }
}

/// Runs one `UnseeAttachmentCommand` per contract with at most
/// `max_concurrent` in flight.
pub async fn fan_out(
    handler: Arc<UnseeAttachmentHandler>,
    contract_ids: Vec<ContractId>,
    attachment_id: AttachmentId,
    metadata: CommandMetadata,
    max_concurrent: usize,
) -> FanOutReport {
    let initial = FanOutReport {
        dispatched: contract_ids.len(),
        ..FanOutReport::default()
    };

    let report = stream::iter(contract_ids)
        .map(|contract_id| {
            let handler = handler.clone();
            let cmd = UnseeAttachmentCommand {
                contract_id,
                attachment_id: attachment_id.clone(),
            };
            let metadata = metadata.clone();
            async move { (contract_id, handler.handle(cmd, metadata).await) }
        })
        .buffer_unordered(max_concurrent.max(1))
        .fold(initial, |mut report, (contract_id, outcome)| {
            match outcome {
                Ok(UnseeAttachmentOutcome::Applied) => report.applied += 1,
                Ok(UnseeAttachmentOutcome::NotReferenced) => report.skipped += 1,
                Err(err) => {
                    report.failed += 1;
                    tracing::warn!(
                        contract_id = %contract_id,
                        attachment_id = %attachment_id,
                        error = %err,
                        "unsee dispatch failed"
                    );
                }
            }
            async move { report }
        })
        .await;

    tracing::info!(
        attachment_id = %attachment_id,
        dispatched = report.dispatched,
        applied = report.applied,
        skipped = report.skipped,
        failed = report.failed,
        "attachment fan-out finished"
    );
    report
}

#[async_trait]
impl EventHandler for AttachmentSyncListener {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if event.event_type != DOCUMENT_CONTENT_UPDATED {
            tracing::warn!(pattern = %event.event_type, "ignoring message with unknown pattern");
            return Ok(());
        }

        self.dispatch(&event).await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "AttachmentSyncListener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::{MockContractRepository, RecordingPublisher};
    use crate::domain::contract::{Contract, CONTRACT_BECAME_UNSIGNABLE};
    use crate::domain::foundation::DocumentId;
    use serde_json::json;

    fn seen(ids: &[AttachmentId]) -> Contract {
        let mut contract = Contract::create(ids.to_vec());
        for id in ids {
            contract.see_attachment(id).unwrap();
        }
        contract
    }

    fn listener(
        repo: Arc<MockContractRepository>,
        publisher: Arc<RecordingPublisher>,
    ) -> AttachmentSyncListener {
        let unsee = Arc::new(UnseeAttachmentHandler::new(repo.clone(), publisher));
        AttachmentSyncListener::new(repo, unsee, 4)
    }

    #[tokio::test]
    async fn unsees_only_contracts_referencing_the_document() {
        let d1 = DocumentId::new();
        let d1_attachment = AttachmentId::from(d1);
        let other = AttachmentId::new("other-doc").unwrap();

        let c1 = seen(&[d1_attachment.clone(), other.clone()]);
        let c2 = seen(&[other.clone()]);
        let mut c3 = seen(&[d1_attachment.clone()]);
        c3.sign().unwrap();
        let (c1_id, c2_id, c3_id) = (c1.id(), c2.id(), c3.id());

        let repo = Arc::new(MockContractRepository::with_contracts([c1, c2, c3]));
        let publisher = Arc::new(RecordingPublisher::new());
        let listener = listener(repo.clone(), publisher.clone());

        let message = DocumentContentUpdatedMessage::new(d1).into_envelope().unwrap();
        let report = listener.dispatch(&message).await.unwrap().await.unwrap();

        assert_eq!(
            report,
            FanOutReport {
                dispatched: 2,
                applied: 1,
                skipped: 1,
                failed: 0
            }
        );
        assert!(!repo.stored(&c1_id).unwrap().all_attachments_seen());
        assert!(repo.stored(&c2_id).unwrap().all_attachments_seen());
        assert!(repo.stored(&c3_id).unwrap().is_signed());
        assert_eq!(publisher.event_types(), vec![CONTRACT_BECAME_UNSIGNABLE.to_string()]);
    }

    #[tokio::test]
    async fn commands_are_caused_by_the_message() {
        let d1 = DocumentId::new();
        let contract = seen(&[AttachmentId::from(d1)]);
        let repo = Arc::new(MockContractRepository::with_contracts([contract]));
        let publisher = Arc::new(RecordingPublisher::new());
        let listener = listener(repo, publisher.clone());

        let message = DocumentContentUpdatedMessage::new(d1)
            .into_envelope()
            .unwrap()
            .with_correlation_id("corr-1");
        listener.dispatch(&message).await.unwrap().await.unwrap();

        let published = publisher.published();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].metadata.correlation_id.as_deref(), Some("corr-1"));
        assert_eq!(
            published[0].metadata.causation_id.as_deref(),
            Some(message.event_id.as_str())
        );
    }

    #[tokio::test]
    async fn duplicate_delivery_is_harmless() {
        let d1 = DocumentId::new();
        let contract = seen(&[AttachmentId::from(d1)]);
        let repo = Arc::new(MockContractRepository::with_contracts([contract]));
        let publisher = Arc::new(RecordingPublisher::new());
        let listener = listener(repo, publisher.clone());
        let message = DocumentContentUpdatedMessage::new(d1).into_envelope().unwrap();

        let first = listener.dispatch(&message).await.unwrap().await.unwrap();
        let second = listener.dispatch(&message).await.unwrap().await.unwrap();

        assert_eq!(first.failed + second.failed, 0);
        assert_eq!(publisher.event_types().len(), 1);
    }

    #[tokio::test]
    async fn no_unsigned_contracts_is_an_empty_fan_out() {
        let repo = Arc::new(MockContractRepository::new());
        let listener = listener(repo, Arc::new(RecordingPublisher::new()));
        let message = DocumentContentUpdatedMessage::new(DocumentId::new())
            .into_envelope()
            .unwrap();

        let report = listener.dispatch(&message).await.unwrap().await.unwrap();

        assert_eq!(report, FanOutReport::default());
    }

    #[tokio::test]
    async fn unknown_pattern_is_ignored() {
        let repo = Arc::new(MockContractRepository::new());
        let listener = listener(repo, Arc::new(RecordingPublisher::new()));

        let result = listener.handle(EventEnvelope::test_fixture()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn malformed_payload_is_an_error() {
        let repo = Arc::new(MockContractRepository::new());
        let listener = listener(repo, Arc::new(RecordingPublisher::new()));
        let message = EventEnvelope::new(DOCUMENT_CONTENT_UPDATED, "x", "Document", json!({"nope": 1}));

        assert!(listener.handle(message).await.is_err());
    }

    #[tokio::test]
    async fn missing_contract_counts_as_failure_without_stopping_others() {
        let d1 = DocumentId::new();
        let contract = seen(&[AttachmentId::from(d1)]);
        let present = contract.id();
        let repo = Arc::new(MockContractRepository::with_contracts([contract]));
        let unsee = Arc::new(UnseeAttachmentHandler::new(
            repo.clone(),
            Arc::new(RecordingPublisher::new()),
        ));

        let report = fan_out(
            unsee,
            vec![ContractId::new(), present],
            AttachmentId::from(d1),
            CommandMetadata::test_fixture(),
            1,
        )
        .await;

        assert_eq!(report.failed, 1);
        assert_eq!(report.applied, 1);
        assert!(!repo.stored(&present).unwrap().all_attachments_seen());
    }
}
