//! Contract command, query and event handlers.

mod attachment_sync_listener;
mod contract_activity_logger;
mod create_contract;
mod get_contract;
mod see_attachment;
mod sign_contract;
mod unsee_attachment;

pub use attachment_sync_listener::{fan_out, AttachmentSyncListener, FanOutReport};
pub use contract_activity_logger::ContractActivityLogger;
pub use create_contract::{CreateContractCommand, CreateContractHandler, CreateContractResult};
pub use get_contract::{
    GetAllContractsHandler, GetAllContractsQuery, GetContractHandler, GetContractQuery,
};
pub use see_attachment::{SeeAttachmentCommand, SeeAttachmentHandler};
pub use sign_contract::{SignContractCommand, SignContractHandler};
pub use unsee_attachment::{UnseeAttachmentCommand, UnseeAttachmentHandler, UnseeAttachmentOutcome};
