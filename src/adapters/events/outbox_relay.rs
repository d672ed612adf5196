//! OutboxRelay - background delivery of outbox entries to the broker.
//!
//! Polls the outbox on a fixed interval, publishes each deliverable entry
//! to its destination queue and records the outcome. Failed entries stay
//! deliverable and are retried on the next poll.
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `poll_interval` | 100ms | How often to check for undelivered entries |
//! | `batch_size` | 100 | Max entries per poll |
//! | `retention` | 24h | Age after which published entries are deleted |
//!
//! The hourly cleanup tick also prunes processed-event records older than
//! the retention window when a store is attached.
//!
//! On shutdown the relay processes one final batch before returning.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{MessageBroker, OutboxWriter, ProcessedEventStore};

/// Configuration for the OutboxRelay.
#[derive(Debug, Clone)]
pub struct OutboxRelayConfig {
    pub poll_interval: Duration,
    pub batch_size: u32,
    /// Published entries older than this many hours are deleted.
    pub retention_hours: u32,
}

impl Default for OutboxRelayConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(100),
            batch_size: 100,
            retention_hours: 24,
        }
    }
}

impl OutboxRelayConfig {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_batch_size(mut self, size: u32) -> Self {
        self.batch_size = size;
        self
    }

    pub fn with_retention_hours(mut self, hours: u32) -> Self {
        self.retention_hours = hours;
        self
    }
}

/// Outcome of one relay pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelayBatch {
    pub published: usize,
    pub failed: usize,
}

/// Outcome of one cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub outbox_entries: u64,
    pub processed_events: u64,
}

/// Background service moving outbox entries onto the broker.
pub struct OutboxRelay {
    outbox: Arc<dyn OutboxWriter>,
    broker: Arc<dyn MessageBroker>,
    processed_events: Option<Arc<dyn ProcessedEventStore>>,
    config: OutboxRelayConfig,
}

impl OutboxRelay {
    pub fn new(
        outbox: Arc<dyn OutboxWriter>,
        broker: Arc<dyn MessageBroker>,
        config: OutboxRelayConfig,
    ) -> Self {
        Self {
            outbox,
            broker,
            processed_events: None,
            config,
        }
    }

    /// Prunes `store` on the cleanup tick with the same retention window.
    pub fn with_processed_events(mut self, store: Arc<dyn ProcessedEventStore>) -> Self {
        self.processed_events = Some(store);
        self
    }

    /// Runs until `shutdown` flips to `true` or its sender is dropped.
    ///
    /// Batch errors are logged and the loop keeps polling.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.poll_interval);
        let mut cleanup = time::interval(Duration::from_secs(3600));

        tracing::info!(
            poll_interval_ms = self.config.poll_interval.as_millis() as u64,
            batch_size = self.config.batch_size,
            "outbox relay started"
        );

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        if let Err(e) = self.process_batch().await {
                            tracing::error!(error = %e, "final outbox batch failed");
                        }
                        tracing::info!("outbox relay stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    if let Err(e) = self.process_batch().await {
                        tracing::error!(error = %e, "outbox batch failed");
                    }
                }

                _ = cleanup.tick() => {
                    let report = self.cleanup().await;
                    if report != CleanupReport::default() {
                        tracing::debug!(
                            outbox_entries = report.outbox_entries,
                            processed_events = report.processed_events,
                            "retention cleanup finished"
                        );
                    }
                }
            }
        }
    }

    /// Deletes published outbox entries and processed-event records older
    /// than the retention window. Failures are logged and counted as zero.
    pub async fn cleanup(&self) -> CleanupReport {
        let mut report = CleanupReport::default();

        match self.outbox.cleanup_old(self.config.retention_hours).await {
            Ok(removed) => report.outbox_entries = removed,
            Err(e) => tracing::warn!(error = %e, "outbox cleanup failed"),
        }

        if let Some(store) = &self.processed_events {
            let retention = chrono::Duration::hours(i64::from(self.config.retention_hours));
            let cutoff = Timestamp::now().minus(retention);
            match store.delete_before(cutoff).await {
                Ok(removed) => report.processed_events = removed,
                Err(e) => tracing::warn!(error = %e, "processed-event cleanup failed"),
            }
        }

        report
    }

    /// Delivers one batch of deliverable entries.
    pub async fn process_batch(&self) -> Result<RelayBatch, DomainError> {
        let entries = self.outbox.get_pending(self.config.batch_size).await?;
        let mut batch = RelayBatch::default();

        for entry in entries {
            match self
                .broker
                .publish(&entry.destination, entry.event.clone())
                .await
            {
                Ok(()) => {
                    self.outbox.mark_published(entry.id).await?;
                    batch.published += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        outbox_id = %entry.id,
                        event_id = %entry.event.event_id,
                        queue = %entry.destination,
                        attempts = entry.attempts + 1,
                        error = %e,
                        "outbox delivery failed"
                    );
                    self.outbox.mark_failed(entry.id, &e.to_string()).await?;
                    batch.failed += 1;
                }
            }
        }

        Ok(batch)
    }
}
