//! ContractActivityLogger - logs committed contract events.

use async_trait::async_trait;

use crate::domain::contract::{CONTRACT_BECAME_SIGNABLE, CONTRACT_BECAME_UNSIGNABLE, CONTRACT_SIGNED};
use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::EventHandler;

#[derive(Debug, Default, Clone, Copy)]
pub struct ContractActivityLogger;

impl ContractActivityLogger {
    pub const EVENT_TYPES: [&'static str; 3] = [
        CONTRACT_BECAME_SIGNABLE,
        CONTRACT_BECAME_UNSIGNABLE,
        CONTRACT_SIGNED,
    ];

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventHandler for ContractActivityLogger {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let contract_id = event.aggregate_id.as_str();
        match event.event_type.as_str() {
            CONTRACT_BECAME_SIGNABLE => tracing::info!(contract_id, "contract became signable"),
            CONTRACT_BECAME_UNSIGNABLE => {
                let attachment_id = event.payload["attachment_id"].as_str().unwrap_or_default();
                tracing::info!(contract_id, attachment_id, "contract became unsignable");
            }
            CONTRACT_SIGNED => tracing::info!(contract_id, "contract signed event committed"),
            other => tracing::debug!(event_type = other, "ignoring non-contract event"),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ContractActivityLogger"
    }
}
