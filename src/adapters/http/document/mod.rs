//! HTTP adapter for document endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateDocumentRequest, CreateDocumentResponse, DocumentCommandResponse,
    UpdateDocumentContentRequest,
};
pub use handlers::DocumentHandlers;
pub use routes::document_routes;
