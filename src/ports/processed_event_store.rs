//! ProcessedEventStore port - remembers which events a handler has applied.
//!
//! Brokers redeliver. Recording `(event_id, handler_name)` after a
//! successful handle lets a decorator skip the repeat.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventId, Timestamp};

/// Port for per-handler processed-event tracking.
#[async_trait]
pub trait ProcessedEventStore: Send + Sync {
    /// Returns `true` if `handler_name` already processed `event_id`.
    async fn contains(&self, event_id: &EventId, handler_name: &str) -> Result<bool, DomainError>;

    /// Records `event_id` as processed by `handler_name`.
    ///
    /// Call only after the handler succeeded.
    async fn mark_processed(&self, event_id: &EventId, handler_name: &str)
        -> Result<(), DomainError>;

    /// Forget entries recorded before `timestamp`. Returns how many were removed.
    async fn delete_before(&self, timestamp: Timestamp) -> Result<u64, DomainError>;
}
