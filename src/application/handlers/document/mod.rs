//! Document command, query and event handlers.

mod content_update_forwarder;
mod create_document;
mod document_activity_logger;
mod get_document;
mod update_document_content;

pub use content_update_forwarder::ContentUpdateForwarder;
pub use create_document::{CreateDocumentCommand, CreateDocumentHandler, CreateDocumentResult};
pub use document_activity_logger::DocumentActivityLogger;
pub use get_document::{GetDocumentHandler, GetDocumentQuery};
pub use update_document_content::{UpdateDocumentContentCommand, UpdateDocumentContentHandler};
