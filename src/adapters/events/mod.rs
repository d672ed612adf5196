//! Event adapters.
//!
//! - `InMemoryEventBus` - in-process publish/subscribe
//! - `IdempotentHandler` - skips events a handler already processed
//! - `InMemoryProcessedEventStore` - processed-event records
//! - `InMemoryOutbox` - outbox entries awaiting delivery
//! - `OutboxRelay` - background delivery from outbox to broker

mod idempotent_handler;
mod in_memory;
mod in_memory_outbox;
mod in_memory_processed_events;
mod outbox_relay;

pub use idempotent_handler::IdempotentHandler;
pub use in_memory::InMemoryEventBus;
pub use in_memory_outbox::InMemoryOutbox;
pub use in_memory_processed_events::InMemoryProcessedEventStore;
pub use outbox_relay::{CleanupReport, OutboxRelay, OutboxRelayConfig, RelayBatch};
