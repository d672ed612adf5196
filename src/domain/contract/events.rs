//! Contract domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AttachmentId, ContractId, DomainError, EventEnvelope, EventId, SerializableDomainEvent,
    Timestamp,
};

pub const CONTRACT_BECAME_SIGNABLE: &str = "contract.became_signable.v1";
pub const CONTRACT_BECAME_UNSIGNABLE: &str = "contract.became_unsignable.v1";
pub const CONTRACT_SIGNED: &str = "contract.signed.v1";

/// Every attachment of the contract is now seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractBecameSignable {
    pub event_id: EventId,
    pub contract_id: ContractId,
    pub occurred_at: Timestamp,
}

crate::domain_event!(
    ContractBecameSignable,
    event_type = "contract.became_signable.v1",
    schema_version = 1,
    aggregate_id = contract_id,
    aggregate_type = "Contract",
    occurred_at = occurred_at,
    event_id = event_id
);

/// An attachment went back to unseen, so the contract can no longer be signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractBecameUnsignable {
    pub event_id: EventId,
    pub contract_id: ContractId,
    pub attachment_id: AttachmentId,
    pub occurred_at: Timestamp,
}

crate::domain_event!(
    ContractBecameUnsignable,
    event_type = "contract.became_unsignable.v1",
    schema_version = 1,
    aggregate_id = contract_id,
    aggregate_type = "Contract",
    occurred_at = occurred_at,
    event_id = event_id
);

/// The contract was signed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractSigned {
    pub event_id: EventId,
    pub contract_id: ContractId,
    pub signed_at: Timestamp,
}

crate::domain_event!(
    ContractSigned,
    event_type = "contract.signed.v1",
    schema_version = 1,
    aggregate_id = contract_id,
    aggregate_type = "Contract",
    occurred_at = signed_at,
    event_id = event_id
);

/// Events recorded by the Contract aggregate.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractEvent {
    BecameSignable(ContractBecameSignable),
    BecameUnsignable(ContractBecameUnsignable),
    Signed(ContractSigned),
}

impl ContractEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ContractEvent::BecameSignable(_) => CONTRACT_BECAME_SIGNABLE,
            ContractEvent::BecameUnsignable(_) => CONTRACT_BECAME_UNSIGNABLE,
            ContractEvent::Signed(_) => CONTRACT_SIGNED,
        }
    }

    pub fn contract_id(&self) -> ContractId {
        match self {
            ContractEvent::BecameSignable(e) => e.contract_id,
            ContractEvent::BecameUnsignable(e) => e.contract_id,
            ContractEvent::Signed(e) => e.contract_id,
        }
    }

    pub fn to_envelope(&self) -> Result<EventEnvelope, DomainError> {
        match self {
            ContractEvent::BecameSignable(e) => e.to_envelope(),
            ContractEvent::BecameUnsignable(e) => e.to_envelope(),
            ContractEvent::Signed(e) => e.to_envelope(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_envelope_uses_contract_routing() {
        let contract_id = ContractId::new();
        let event = ContractEvent::Signed(ContractSigned {
            event_id: EventId::new(),
            contract_id,
            signed_at: Timestamp::now(),
        });

        let envelope = event.to_envelope().unwrap();

        assert_eq!(envelope.event_type, CONTRACT_SIGNED);
        assert_eq!(envelope.aggregate_type, "Contract");
        assert_eq!(envelope.aggregate_id, contract_id.to_string());
        assert_eq!(event.contract_id(), contract_id);
    }

    #[test]
    fn unsignable_payload_names_the_attachment() {
        let attachment_id = AttachmentId::new("doc-1").unwrap();
        let event = ContractEvent::BecameUnsignable(ContractBecameUnsignable {
            event_id: EventId::new(),
            contract_id: ContractId::new(),
            attachment_id: attachment_id.clone(),
            occurred_at: Timestamp::now(),
        });

        let envelope = event.to_envelope().unwrap();
        let payload: ContractBecameUnsignable = envelope.payload_as().unwrap();

        assert_eq!(payload.attachment_id, attachment_id);
        assert_eq!(event.event_type(), CONTRACT_BECAME_UNSIGNABLE);
    }
}
