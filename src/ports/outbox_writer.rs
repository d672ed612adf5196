//! OutboxWriter port - durable hand-off of integration messages.
//!
//! Subscribers write outgoing broker messages here instead of sending them
//! directly. The `OutboxRelay` later publishes pending entries to their
//! destination queue and records the outcome, so a message written before
//! a crash is still delivered after restart.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, EventEnvelope, Timestamp};

/// Delivery state of an outbox entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutboxStatus {
    /// Written, not yet delivered.
    Pending,
    /// Accepted by the broker.
    Published,
    /// Last attempt failed; retried on the next poll.
    Failed,
}

/// A message waiting in the outbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEntry {
    pub id: Uuid,
    pub event: EventEnvelope,
    /// Broker queue the message is addressed to.
    pub destination: String,
    pub status: OutboxStatus,
    pub created_at: Timestamp,
    pub processed_at: Option<Timestamp>,
    pub attempts: u32,
    pub last_error: Option<String>,
    /// Ordering key, typically the source aggregate id.
    pub partition_key: String,
}

impl OutboxEntry {
    pub fn new(
        event: EventEnvelope,
        destination: impl Into<String>,
        partition_key: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            event,
            destination: destination.into(),
            status: OutboxStatus::Pending,
            created_at: Timestamp::now(),
            processed_at: None,
            attempts: 0,
            last_error: None,
            partition_key: partition_key.into(),
        }
    }

    pub fn mark_published(&mut self) {
        self.status = OutboxStatus::Published;
        self.processed_at = Some(Timestamp::now());
        self.attempts += 1;
        self.last_error = None;
    }

    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.status = OutboxStatus::Failed;
        self.processed_at = Some(Timestamp::now());
        self.attempts += 1;
        self.last_error = Some(error.into());
    }

    /// Pending and failed entries are both due for delivery.
    pub fn is_deliverable(&self) -> bool {
        matches!(self.status, OutboxStatus::Pending | OutboxStatus::Failed)
    }
}

/// Port for the outbox store.
#[async_trait]
pub trait OutboxWriter: Send + Sync {
    /// Append a message addressed to `destination`.
    async fn write(
        &self,
        event: &EventEnvelope,
        destination: &str,
        partition_key: &str,
    ) -> Result<OutboxEntry, DomainError>;

    /// Deliverable entries (pending or failed), oldest first, at most `limit`.
    async fn get_pending(&self, limit: u32) -> Result<Vec<OutboxEntry>, DomainError>;

    async fn mark_published(&self, id: Uuid) -> Result<(), DomainError>;

    async fn mark_failed(&self, id: Uuid, error: &str) -> Result<(), DomainError>;

    /// Delete published entries processed more than `older_than_hours` ago.
    ///
    /// Returns the number of entries removed.
    async fn cleanup_old(&self, older_than_hours: u32) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entry_is_pending_and_deliverable() {
        let entry = OutboxEntry::new(EventEnvelope::test_fixture(), "contract-service", "doc-1");

        assert_eq!(entry.status, OutboxStatus::Pending);
        assert_eq!(entry.attempts, 0);
        assert_eq!(entry.destination, "contract-service");
        assert!(entry.is_deliverable());
    }

    #[test]
    fn failed_entry_stays_deliverable_and_counts_attempts() {
        let mut entry = OutboxEntry::new(EventEnvelope::test_fixture(), "q", "k");

        entry.mark_failed("broker down");

        assert_eq!(entry.status, OutboxStatus::Failed);
        assert_eq!(entry.attempts, 1);
        assert_eq!(entry.last_error.as_deref(), Some("broker down"));
        assert!(entry.is_deliverable());
    }

    #[test]
    fn published_entry_clears_error() {
        let mut entry = OutboxEntry::new(EventEnvelope::test_fixture(), "q", "k");
        entry.mark_failed("once");

        entry.mark_published();

        assert_eq!(entry.status, OutboxStatus::Published);
        assert_eq!(entry.attempts, 2);
        assert!(entry.last_error.is_none());
        assert!(!entry.is_deliverable());
    }
}
