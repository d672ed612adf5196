//! Contract context - signable bundles of document attachments.

mod aggregate;
mod attachment;
mod errors;
mod events;

pub use aggregate::Contract;
pub use attachment::Attachment;
pub use errors::ContractError;
pub use events::{
    ContractBecameSignable, ContractBecameUnsignable, ContractEvent, ContractSigned,
    CONTRACT_BECAME_SIGNABLE, CONTRACT_BECAME_UNSIGNABLE, CONTRACT_SIGNED,
};
