//! In-memory `OutboxWriter`.
//!
//! Entries live in insertion order. Suitable for a single process; a
//! restart loses undelivered entries.

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, Timestamp};
use crate::ports::{OutboxEntry, OutboxStatus, OutboxWriter};

#[derive(Debug, Default)]
pub struct InMemoryOutbox {
    entries: RwLock<Vec<OutboxEntry>>,
}

impl InMemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry, in insertion order.
    pub async fn entries(&self) -> Vec<OutboxEntry> {
        self.entries.read().await.clone()
    }

    pub async fn count_with_status(&self, status: OutboxStatus) -> usize {
        self.entries
            .read()
            .await
            .iter()
            .filter(|e| e.status == status)
            .count()
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut OutboxEntry) + Send,
    {
        let mut entries = self.entries.write().await;
        let entry = entries.iter_mut().find(|e| e.id == id).ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, format!("Outbox entry not found: {}", id))
        })?;
        apply(entry);
        Ok(())
    }
}

#[async_trait]
impl OutboxWriter for InMemoryOutbox {
    async fn write(
        &self,
        event: &EventEnvelope,
        destination: &str,
        partition_key: &str,
    ) -> Result<OutboxEntry, DomainError> {
        let entry = OutboxEntry::new(event.clone(), destination, partition_key);
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn get_pending(&self, limit: u32) -> Result<Vec<OutboxEntry>, DomainError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|e| e.is_deliverable())
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn mark_published(&self, id: Uuid) -> Result<(), DomainError> {
        self.update(id, OutboxEntry::mark_published).await
    }

    async fn mark_failed(&self, id: Uuid, error: &str) -> Result<(), DomainError> {
        let error = error.to_string();
        self.update(id, move |entry| entry.mark_failed(error)).await
    }

    async fn cleanup_old(&self, older_than_hours: u32) -> Result<u64, DomainError> {
        let cutoff = Timestamp::now().minus(Duration::hours(i64::from(older_than_hours)));
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| {
            !(e.status == OutboxStatus::Published
                && e.processed_at.map_or(false, |at| !at.is_after(&cutoff)))
        });
        Ok((before - entries.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pending_respects_limit_and_order() {
        let outbox = InMemoryOutbox::new();
        let first = outbox
            .write(&EventEnvelope::test_fixture(), "q", "a")
            .await
            .unwrap();
        outbox.write(&EventEnvelope::test_fixture(), "q", "b").await.unwrap();

        let pending = outbox.get_pending(1).await.unwrap();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, first.id);
    }

    #[tokio::test]
    async fn failed_entries_stay_pending_published_do_not() {
        let outbox = InMemoryOutbox::new();
        let a = outbox.write(&EventEnvelope::test_fixture(), "q", "a").await.unwrap();
        let b = outbox.write(&EventEnvelope::test_fixture(), "q", "b").await.unwrap();

        outbox.mark_failed(a.id, "broker down").await.unwrap();
        outbox.mark_published(b.id).await.unwrap();

        let pending = outbox.get_pending(10).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, a.id);
        assert_eq!(pending[0].last_error.as_deref(), Some("broker down"));
    }

    #[tokio::test]
    async fn marking_unknown_entry_fails() {
        let outbox = InMemoryOutbox::new();
        assert!(outbox.mark_published(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn cleanup_removes_only_published_entries() {
        let outbox = InMemoryOutbox::new();
        let a = outbox.write(&EventEnvelope::test_fixture(), "q", "a").await.unwrap();
        outbox.write(&EventEnvelope::test_fixture(), "q", "b").await.unwrap();
        outbox.mark_published(a.id).await.unwrap();

        let removed = outbox.cleanup_old(0).await.unwrap();

        assert_eq!(removed, 1);
        assert_eq!(outbox.entries().await.len(), 1);
        assert_eq!(outbox.count_with_status(OutboxStatus::Pending).await, 1);
    }
}
