//! Application router.

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::contract::{contract_routes, ContractHandlers};
use super::document::{document_routes, DocumentHandlers};

/// Mounts every context's routes and traces each request.
pub fn app_router(documents: DocumentHandlers, contracts: ContractHandlers) -> Router {
    Router::new()
        .nest("/documents", document_routes(documents))
        .nest("/contracts", contract_routes(contracts))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
