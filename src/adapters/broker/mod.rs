//! Message broker adapters.
//!
//! - `InMemoryBroker` - named, bounded, durable in-process queues
//! - `BrokerConsumer` - per-queue consumption loop

mod consumer;
mod in_memory;

pub use consumer::BrokerConsumer;
pub use in_memory::InMemoryBroker;
