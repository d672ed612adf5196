//! Document context - editable content that other contexts reference.

mod aggregate;
mod errors;
mod events;

pub use aggregate::{Document, CONTENT_UPDATE_WINDOW_YEARS};
pub use errors::DocumentError;
pub use events::{
    DocumentContentUpdated, DocumentCreated, DocumentEvent, DOCUMENT_CONTENT_UPDATED,
    DOCUMENT_CREATED,
};
