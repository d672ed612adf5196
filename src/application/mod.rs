//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! Every command handler loads, mutates, persists and only then publishes.

pub mod handlers;

pub use handlers::{
    // Document handlers
    ContentUpdateForwarder, CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult,
    DocumentActivityLogger, GetDocumentHandler, GetDocumentQuery, UpdateDocumentContentCommand,
    UpdateDocumentContentHandler,
    // Contract handlers
    AttachmentSyncListener, ContractActivityLogger, CreateContractCommand, CreateContractHandler,
    CreateContractResult, FanOutReport, GetAllContractsHandler, GetAllContractsQuery,
    GetContractHandler, GetContractQuery, SeeAttachmentCommand, SeeAttachmentHandler,
    SignContractCommand, SignContractHandler, UnseeAttachmentCommand, UnseeAttachmentHandler,
    UnseeAttachmentOutcome,
};
