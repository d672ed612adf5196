//! Application assembly.
//!
//! Builds every adapter and handler from an `AppConfig` and connects them:
//!
//! ```text
//! HTTP -> command handlers -> repositories (Store)
//!                          -> InMemoryEventBus -> activity loggers
//!                                              -> ContentUpdateForwarder -> outbox
//! OutboxRelay: outbox -> broker queue
//! BrokerConsumer: broker queue -> IdempotentHandler<AttachmentSyncListener>
//!                              -> UnseeAttachmentHandler per unsigned contract
//! ```

use std::sync::Arc;

use axum::Router;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::adapters::broker::{BrokerConsumer, InMemoryBroker};
use crate::adapters::events::{
    IdempotentHandler, InMemoryEventBus, InMemoryOutbox, InMemoryProcessedEventStore, OutboxRelay,
    OutboxRelayConfig,
};
use crate::adapters::http::{app_router, ContractHandlers, DocumentHandlers};
use crate::adapters::storage::{InMemoryStore, StoreContractRepository, StoreDocumentRepository};
use crate::application::handlers::{
    AttachmentSyncListener, ContentUpdateForwarder, ContractActivityLogger, CreateContractHandler,
    CreateDocumentHandler, DocumentActivityLogger, GetAllContractsHandler, GetContractHandler,
    GetDocumentHandler, SeeAttachmentHandler, SignContractHandler, UnseeAttachmentHandler,
    UpdateDocumentContentHandler,
};
use crate::config::AppConfig;
use crate::domain::document::DOCUMENT_CONTENT_UPDATED;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{
    ContractReader, ContractRepository, DocumentReader, DocumentRepository, EventHandler,
    EventPublisher, EventSubscriber, MessageBroker, OutboxWriter, ProcessedEventStore,
};

/// A fully wired application whose background tasks have not started.
pub struct Application {
    router: Router,
    relay: OutboxRelay,
    consumer: BrokerConsumer,
}

/// Handles to the relay and consumer tasks.
pub struct BackgroundTasks {
    relay: JoinHandle<()>,
    consumer: JoinHandle<u64>,
}

impl Application {
    /// Wires the application.
    ///
    /// # Errors
    ///
    /// `BrokerError` if the contract queue already has a consumer.
    pub fn build(config: &AppConfig) -> Result<Self, DomainError> {
        // Storage
        let documents = Arc::new(StoreDocumentRepository::new(Arc::new(InMemoryStore::new())));
        let contracts = Arc::new(StoreContractRepository::new(Arc::new(InMemoryStore::new())));
        let document_repository: Arc<dyn DocumentRepository> = documents.clone();
        let document_reader: Arc<dyn DocumentReader> = documents;
        let contract_repository: Arc<dyn ContractRepository> = contracts.clone();
        let contract_reader: Arc<dyn ContractReader> = contracts;

        // In-process events
        let event_bus = Arc::new(InMemoryEventBus::without_history());
        let publisher: Arc<dyn EventPublisher> = event_bus.clone();

        // Delivery
        let outbox: Arc<dyn OutboxWriter> = Arc::new(InMemoryOutbox::new());
        let broker = Arc::new(InMemoryBroker::new(config.broker.consumer_buffer));
        let queue = config.broker.contract_queue.clone();

        event_bus.subscribe_all(
            &DocumentActivityLogger::EVENT_TYPES,
            Arc::new(DocumentActivityLogger::new()),
        );
        event_bus.subscribe_all(
            &ContractActivityLogger::EVENT_TYPES,
            Arc::new(ContractActivityLogger::new()),
        );
        event_bus.subscribe(
            DOCUMENT_CONTENT_UPDATED,
            Arc::new(ContentUpdateForwarder::new(outbox.clone(), queue.clone())),
        );

        // Command and query handlers
        let document_handlers = DocumentHandlers::new(
            Arc::new(CreateDocumentHandler::new(
                document_repository.clone(),
                publisher.clone(),
            )),
            Arc::new(UpdateDocumentContentHandler::new(
                document_repository,
                publisher.clone(),
            )),
            Arc::new(GetDocumentHandler::new(document_reader)),
        );
        let contract_handlers = ContractHandlers::new(
            Arc::new(CreateContractHandler::new(
                contract_repository.clone(),
                publisher.clone(),
            )),
            Arc::new(SeeAttachmentHandler::new(
                contract_repository.clone(),
                publisher.clone(),
            )),
            Arc::new(SignContractHandler::new(
                contract_repository.clone(),
                publisher.clone(),
            )),
            Arc::new(GetContractHandler::new(contract_reader.clone())),
            Arc::new(GetAllContractsHandler::new(contract_reader)),
        );

        // Broker side of the Contract context
        let unsee_handler = Arc::new(UnseeAttachmentHandler::new(
            contract_repository.clone(),
            publisher,
        ));
        let processed_events: Arc<dyn ProcessedEventStore> =
            Arc::new(InMemoryProcessedEventStore::new());
        let listener = IdempotentHandler::new(
            AttachmentSyncListener::new(
                contract_repository,
                unsee_handler,
                config.sync.max_concurrent_dispatches,
            ),
            processed_events.clone(),
        );
        let listener: Arc<dyn EventHandler> = Arc::new(listener);

        let receiver = broker.take_receiver(&queue).ok_or_else(|| {
            DomainError::new(
                ErrorCode::BrokerError,
                format!("Queue {} already has a consumer", queue),
            )
        })?;
        let consumer = BrokerConsumer::new(queue, receiver, listener);

        let relay_config = OutboxRelayConfig::default()
            .with_poll_interval(config.outbox.poll_interval())
            .with_batch_size(config.outbox.batch_size)
            .with_retention_hours(config.outbox.retention_hours);
        let broker: Arc<dyn MessageBroker> = broker;
        let relay =
            OutboxRelay::new(outbox, broker, relay_config).with_processed_events(processed_events);

        Ok(Self {
            router: app_router(document_handlers, contract_handlers),
            relay,
            consumer,
        })
    }

    /// Starts the relay and consumer; both stop when `shutdown` flips to `true`.
    pub fn start(self, shutdown: watch::Receiver<bool>) -> (Router, BackgroundTasks) {
        let relay = self.relay;
        let relay_shutdown = shutdown.clone();
        let relay = tokio::spawn(async move { relay.run(relay_shutdown).await });
        let consumer = tokio::spawn(self.consumer.run(shutdown));

        (self.router, BackgroundTasks { relay, consumer })
    }
}

impl BackgroundTasks {
    /// Waits for both tasks to finish.
    pub async fn join(self) {
        if let Err(e) = self.relay.await {
            tracing::error!(error = %e, "outbox relay task failed");
        }
        match self.consumer.await {
            Ok(delivered) => tracing::debug!(delivered, "consumer task finished"),
            Err(e) => tracing::error!(error = %e, "consumer task failed"),
        }
    }
}
