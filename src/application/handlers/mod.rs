//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, plus the
//! event handlers subscribed to the in-process bus and the broker.

pub mod contract;
pub mod document;

mod event_commit;

#[cfg(test)]
pub(crate) mod testing;

pub use contract::{
    AttachmentSyncListener, ContractActivityLogger, CreateContractCommand, CreateContractHandler,
    CreateContractResult, FanOutReport, GetAllContractsHandler, GetAllContractsQuery,
    GetContractHandler, GetContractQuery, SeeAttachmentCommand, SeeAttachmentHandler,
    SignContractCommand, SignContractHandler, UnseeAttachmentCommand, UnseeAttachmentHandler,
    UnseeAttachmentOutcome,
};
pub use document::{
    ContentUpdateForwarder, CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult,
    DocumentActivityLogger, GetDocumentHandler, GetDocumentQuery, UpdateDocumentContentCommand,
    UpdateDocumentContentHandler,
};
