//! Message broker configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Broker configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerConfig {
    /// Queue owned by the Contract context
    #[serde(default = "default_contract_queue")]
    pub contract_queue: String,

    /// Capacity of each queue
    #[serde(default = "default_consumer_buffer")]
    pub consumer_buffer: usize,
}

impl BrokerConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.contract_queue.trim().is_empty() {
            return Err(ValidationError::EmptyQueueName);
        }
        if self.consumer_buffer == 0 {
            return Err(ValidationError::MustBePositive("broker.consumer_buffer"));
        }
        Ok(())
    }
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            contract_queue: default_contract_queue(),
            consumer_buffer: default_consumer_buffer(),
        }
    }
}

fn default_contract_queue() -> String {
    "contract-service".to_string()
}

fn default_consumer_buffer() -> usize {
    1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = BrokerConfig::default();
        assert_eq!(config.contract_queue, "contract-service");
        assert_eq!(config.consumer_buffer, 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_queue_is_rejected() {
        let config = BrokerConfig {
            contract_queue: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyQueueName));
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let config = BrokerConfig {
            consumer_buffer: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
