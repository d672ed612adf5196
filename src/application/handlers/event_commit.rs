//! Releasing drained aggregate events after persistence.

use crate::domain::foundation::{CommandMetadata, DomainError, EventEnvelope};
use crate::ports::EventPublisher;

/// Publishes events drained from a persisted aggregate.
///
/// The aggregate is already stored, so a failure here is logged and does
/// not fail the command. Every envelope carries the command's metadata.
pub(crate) async fn commit_events<I>(
    publisher: &dyn EventPublisher,
    events: I,
    metadata: &CommandMetadata,
) where
    I: IntoIterator<Item = Result<EventEnvelope, DomainError>>,
{
    let event_metadata = metadata.to_event_metadata();
    let mut envelopes = Vec::new();

    for event in events {
        match event {
            Ok(envelope) => envelopes.push(envelope.with_metadata(event_metadata.clone())),
            Err(err) => tracing::warn!(error = %err, "failed to serialize domain event"),
        }
    }

    if envelopes.is_empty() {
        return;
    }

    let count = envelopes.len();
    if let Err(err) = publisher.publish_all(envelopes).await {
        tracing::warn!(
            error = %err,
            count,
            correlation_id = ?event_metadata.correlation_id,
            "committed state but event publication failed"
        );
    }
}
