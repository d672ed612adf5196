//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and the event
//! infrastructure shared by the Document and Contract contexts.

mod command;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::{AttachmentId, ContractId, DocumentId};
pub use timestamp::Timestamp;
