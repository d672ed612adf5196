//! Cross-context synchronization configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Attachment sync configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    /// Upper bound on unsee commands running at once for one message
    #[serde(default = "default_max_concurrent_dispatches")]
    pub max_concurrent_dispatches: usize,
}

impl SyncConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_concurrent_dispatches == 0 {
            return Err(ValidationError::MustBePositive(
                "sync.max_concurrent_dispatches",
            ));
        }
        Ok(())
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_concurrent_dispatches: default_max_concurrent_dispatches(),
        }
    }
}

fn default_max_concurrent_dispatches() -> usize {
    8
}
