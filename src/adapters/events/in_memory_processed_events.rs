//! In-memory `ProcessedEventStore`.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, EventId, Timestamp};
use crate::ports::ProcessedEventStore;

/// Processed-event records keyed by `(event_id, handler_name)`.
#[derive(Debug, Default)]
pub struct InMemoryProcessedEventStore {
    processed: RwLock<HashMap<(String, String), Timestamp>>,
}

impl InMemoryProcessedEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.processed.read().await.len()
    }
}

fn key(event_id: &EventId, handler_name: &str) -> (String, String) {
    (event_id.as_str().to_string(), handler_name.to_string())
}

#[async_trait]
impl ProcessedEventStore for InMemoryProcessedEventStore {
    async fn contains(&self, event_id: &EventId, handler_name: &str) -> Result<bool, DomainError> {
        Ok(self
            .processed
            .read()
            .await
            .contains_key(&key(event_id, handler_name)))
    }

    async fn mark_processed(
        &self,
        event_id: &EventId,
        handler_name: &str,
    ) -> Result<(), DomainError> {
        self.processed
            .write()
            .await
            .entry(key(event_id, handler_name))
            .or_insert_with(Timestamp::now);
        Ok(())
    }

    async fn delete_before(&self, timestamp: Timestamp) -> Result<u64, DomainError> {
        let mut processed = self.processed.write().await;
        let before = processed.len();
        processed.retain(|_, at| !at.is_before(&timestamp));
        Ok((before - processed.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn handlers_are_tracked_separately() {
        let store = InMemoryProcessedEventStore::new();
        let event_id = EventId::from_string("evt-1");

        store.mark_processed(&event_id, "HandlerA").await.unwrap();

        assert!(store.contains(&event_id, "HandlerA").await.unwrap());
        assert!(!store.contains(&event_id, "HandlerB").await.unwrap());
        assert!(!store
            .contains(&EventId::from_string("evt-2"), "HandlerA")
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn mark_processed_is_idempotent() {
        let store = InMemoryProcessedEventStore::new();
        let event_id = EventId::from_string("evt-1");

        store.mark_processed(&event_id, "H").await.unwrap();
        store.mark_processed(&event_id, "H").await.unwrap();

        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_before_removes_older_records() {
        let store = InMemoryProcessedEventStore::new();
        store.mark_processed(&EventId::new(), "H").await.unwrap();

        let kept = store
            .delete_before(Timestamp::now().minus(Duration::hours(1)))
            .await
            .unwrap();
        assert_eq!(kept, 0);

        let removed = store
            .delete_before(Timestamp::now().plus(Duration::seconds(1)))
            .await
            .unwrap();
        assert_eq!(removed, 1);
        assert_eq!(store.len().await, 0);
    }
}
