//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `storage` - Key/value store and store-backed repositories
//! - `events` - In-process event bus, idempotency, outbox and relay
//! - `broker` - In-memory message broker and its consumer loop
//! - `http` - REST API (axum)

pub mod broker;
pub mod events;
pub mod http;
pub mod storage;

pub use broker::{BrokerConsumer, InMemoryBroker};
pub use events::{
    IdempotentHandler, InMemoryEventBus, InMemoryOutbox, InMemoryProcessedEventStore, OutboxRelay,
    OutboxRelayConfig,
};
pub use storage::{InMemoryStore, StoreContractRepository, StoreDocumentRepository};
