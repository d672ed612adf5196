//! HTTP handlers for contract endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::metadata::command_metadata;
use crate::application::handlers::contract::{
    CreateContractCommand, CreateContractHandler, GetAllContractsHandler, GetAllContractsQuery,
    GetContractHandler, GetContractQuery, SeeAttachmentCommand, SeeAttachmentHandler,
    SignContractCommand, SignContractHandler,
};
use crate::domain::contract::ContractError;
use crate::domain::foundation::{AttachmentId, ContractId};

use super::dto::{ContractCommandResponse, CreateContractRequest, CreateContractResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ContractHandlers {
    create_handler: Arc<CreateContractHandler>,
    see_attachment_handler: Arc<SeeAttachmentHandler>,
    sign_handler: Arc<SignContractHandler>,
    get_handler: Arc<GetContractHandler>,
    list_handler: Arc<GetAllContractsHandler>,
}

impl ContractHandlers {
    pub fn new(
        create_handler: Arc<CreateContractHandler>,
        see_attachment_handler: Arc<SeeAttachmentHandler>,
        sign_handler: Arc<SignContractHandler>,
        get_handler: Arc<GetContractHandler>,
        list_handler: Arc<GetAllContractsHandler>,
    ) -> Self {
        Self {
            create_handler,
            see_attachment_handler,
            sign_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /contracts - Create a contract over a set of documents
pub async fn create_contract(
    State(handlers): State<ContractHandlers>,
    headers: HeaderMap,
    Json(req): Json<CreateContractRequest>,
) -> Response {
    let cmd = CreateContractCommand {
        attachment_ids: req.attachment_ids,
    };

    match handlers
        .create_handler
        .handle(cmd, command_metadata(&headers))
        .await
    {
        Ok(result) => {
            let response = CreateContractResponse {
                contract_id: result.contract_id.to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_contract_error(e),
    }
}

/// GET /contracts - List every contract
pub async fn list_contracts(State(handlers): State<ContractHandlers>) -> Response {
    match handlers.list_handler.handle(GetAllContractsQuery).await {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(e) => handle_contract_error(e),
    }
}

/// GET /contracts/:id - Get a contract
pub async fn get_contract(
    State(handlers): State<ContractHandlers>,
    Path(contract_id): Path<String>,
) -> Response {
    let contract_id = match contract_id.parse::<ContractId>() {
        Ok(id) => id,
        Err(_) => return invalid_contract_id(),
    };

    match handlers
        .get_handler
        .handle(GetContractQuery { contract_id })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_contract_error(e),
    }
}

/// POST /contracts/:id/attachments/:attachment_id/see - Acknowledge an attachment
pub async fn see_attachment(
    State(handlers): State<ContractHandlers>,
    headers: HeaderMap,
    Path((contract_id, attachment_id)): Path<(String, String)>,
) -> Response {
    let contract_id = match contract_id.parse::<ContractId>() {
        Ok(id) => id,
        Err(_) => return invalid_contract_id(),
    };
    let attachment_id = match AttachmentId::new(attachment_id) {
        Ok(id) => id,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(e.to_string())),
            )
                .into_response()
        }
    };

    let cmd = SeeAttachmentCommand {
        contract_id,
        attachment_id,
    };

    match handlers
        .see_attachment_handler
        .handle(cmd, command_metadata(&headers))
        .await
    {
        Ok(()) => {
            let response = ContractCommandResponse {
                contract_id: contract_id.to_string(),
                message: "Attachment marked as seen".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contract_error(e),
    }
}

/// POST /contracts/:id/sign - Sign a contract
pub async fn sign_contract(
    State(handlers): State<ContractHandlers>,
    headers: HeaderMap,
    Path(contract_id): Path<String>,
) -> Response {
    let contract_id = match contract_id.parse::<ContractId>() {
        Ok(id) => id,
        Err(_) => return invalid_contract_id(),
    };

    match handlers
        .sign_handler
        .handle(SignContractCommand { contract_id }, command_metadata(&headers))
        .await
    {
        Ok(()) => {
            let response = ContractCommandResponse {
                contract_id: contract_id.to_string(),
                message: "Contract signed".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_contract_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn invalid_contract_id() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid contract ID")),
    )
        .into_response()
}

fn handle_contract_error(error: ContractError) -> Response {
    let code = error.code();
    match error {
        ContractError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Contract", &id.to_string())),
        )
            .into_response(),
        ContractError::AttachmentNotFound {
            contract_id,
            attachment_id,
        } => (
            StatusCode::NOT_FOUND,
            Json(
                ErrorResponse::not_found("Attachment", attachment_id.as_str()).with_details(
                    serde_json::json!({ "contractId": contract_id.to_string() }),
                ),
            ),
        )
            .into_response(),
        e @ ContractError::CannotSignWithUnseenAttachments(_)
        | e @ ContractError::CannotUnseeAttachmentOfSignedContract(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::rejected(code, e.to_string())),
        )
            .into_response(),
        ContractError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::rejected(code, message)
                    .with_details(serde_json::json!({ "field": field })),
            ),
        )
            .into_response(),
        ContractError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "contract request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}
