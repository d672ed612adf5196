//! HTTP handlers for document endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::metadata::command_metadata;
use crate::application::handlers::document::{
    CreateDocumentCommand, CreateDocumentHandler, GetDocumentHandler, GetDocumentQuery,
    UpdateDocumentContentCommand, UpdateDocumentContentHandler,
};
use crate::domain::document::DocumentError;
use crate::domain::foundation::DocumentId;

use super::dto::{
    CreateDocumentRequest, CreateDocumentResponse, DocumentCommandResponse,
    UpdateDocumentContentRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DocumentHandlers {
    create_handler: Arc<CreateDocumentHandler>,
    update_content_handler: Arc<UpdateDocumentContentHandler>,
    get_handler: Arc<GetDocumentHandler>,
}

impl DocumentHandlers {
    pub fn new(
        create_handler: Arc<CreateDocumentHandler>,
        update_content_handler: Arc<UpdateDocumentContentHandler>,
        get_handler: Arc<GetDocumentHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_content_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /documents - Create a document
pub async fn create_document(
    State(handlers): State<DocumentHandlers>,
    headers: HeaderMap,
    Json(req): Json<CreateDocumentRequest>,
) -> Response {
    let cmd = CreateDocumentCommand {
        content: req.content,
    };

    match handlers
        .create_handler
        .handle(cmd, command_metadata(&headers))
        .await
    {
        Ok(result) => {
            let response = CreateDocumentResponse {
                document_id: result.document_id.to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_document_error(e),
    }
}

/// GET /documents/:id - Get a document
pub async fn get_document(
    State(handlers): State<DocumentHandlers>,
    Path(document_id): Path<String>,
) -> Response {
    let document_id = match document_id.parse::<DocumentId>() {
        Ok(id) => id,
        Err(_) => return invalid_document_id(),
    };

    match handlers
        .get_handler
        .handle(GetDocumentQuery { document_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_document_error(e),
    }
}

/// PATCH /documents/:id - Replace a document's content
pub async fn update_document_content(
    State(handlers): State<DocumentHandlers>,
    headers: HeaderMap,
    Path(document_id): Path<String>,
    Json(req): Json<UpdateDocumentContentRequest>,
) -> Response {
    let document_id = match document_id.parse::<DocumentId>() {
        Ok(id) => id,
        Err(_) => return invalid_document_id(),
    };

    let cmd = UpdateDocumentContentCommand {
        document_id,
        content: req.content,
    };

    match handlers
        .update_content_handler
        .handle(cmd, command_metadata(&headers))
        .await
    {
        Ok(()) => {
            let response = DocumentCommandResponse {
                document_id: document_id.to_string(),
                message: "Document content updated".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_document_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn invalid_document_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid document ID")),
    )
        .into_response()
}

fn handle_document_error(error: DocumentError) -> Response {
    let code = error.code();
    match error {
        DocumentError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Document", &id.to_string())),
        )
            .into_response(),
        e @ DocumentError::TooOldForContentUpdate(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::rejected(code, e.to_string())),
        )
            .into_response(),
        DocumentError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "document request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}
