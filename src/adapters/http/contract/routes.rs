//! HTTP routes for contract endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_contract, get_contract, list_contracts, see_attachment, sign_contract,
    ContractHandlers,
};

/// Creates the contract router, to be nested under `/contracts`.
pub fn contract_routes(handlers: ContractHandlers) -> Router {
    Router::new()
        .route("/", post(create_contract).get(list_contracts))
        .route("/:id", get(get_contract))
        .route("/:id/attachments/:attachment_id/see", post(see_attachment))
        .route("/:id/sign", post(sign_contract))
        .with_state(handlers)
}
