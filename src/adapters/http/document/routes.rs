//! HTTP routes for document endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{create_document, get_document, update_document_content, DocumentHandlers};

/// Creates the document router, to be nested under `/documents`.
pub fn document_routes(handlers: DocumentHandlers) -> Router {
    Router::new()
        .route("/", post(create_document))
        .route("/:id", get(get_document).patch(update_document_content))
        .with_state(handlers)
}
