//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `Store` - Key/value storage of persistence models
//! - `DocumentRepository` / `ContractRepository` - Aggregate load and persist
//! - `DocumentReader` / `ContractReader` - Query-side views
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events
//! - `ProcessedEventStore` - Idempotency tracking for event handlers
//!
//! ## Delivery Ports
//!
//! - `OutboxWriter` - Durable staging of outgoing broker messages
//! - `MessageBroker` - Queue-addressed message transport

mod contract_reader;
mod contract_repository;
mod document_reader;
mod document_repository;
mod event_publisher;
mod event_subscriber;
mod message_broker;
mod outbox_writer;
mod processed_event_store;
mod store;

pub use contract_reader::{AttachmentView, ContractReader, ContractView};
pub use contract_repository::ContractRepository;
pub use document_reader::{DocumentReader, DocumentView};
pub use document_repository::DocumentRepository;
pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use message_broker::MessageBroker;
pub use outbox_writer::{OutboxEntry, OutboxStatus, OutboxWriter};
pub use processed_event_store::ProcessedEventStore;
pub use store::Store;
