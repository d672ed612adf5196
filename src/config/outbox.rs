//! Outbox relay configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Outbox relay configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutboxConfig {
    /// Delay between polls for pending entries, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Maximum entries delivered per poll
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,

    /// How long published entries are kept, in hours
    #[serde(default = "default_retention_hours")]
    pub retention_hours: u32,
}

impl OutboxConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.poll_interval_ms == 0 {
            return Err(ValidationError::MustBePositive("outbox.poll_interval_ms"));
        }
        if self.batch_size == 0 {
            return Err(ValidationError::MustBePositive("outbox.batch_size"));
        }
        Ok(())
    }
}

impl Default for OutboxConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
            batch_size: default_batch_size(),
            retention_hours: default_retention_hours(),
        }
    }
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_batch_size() -> u32 {
    100
}

fn default_retention_hours() -> u32 {
    24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = OutboxConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(100));
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.retention_hours, 24);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let config = OutboxConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MustBePositive("outbox.batch_size"))
        );
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let config = OutboxConfig {
            poll_interval_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
