//! HTTP adapters - REST API over the application handlers.
//!
//! Each context has its own module with DTOs, handlers and routes;
//! `app_router` mounts them together.

pub mod contract;
pub mod document;

mod error;
mod metadata;
mod router;

pub use contract::{contract_routes, ContractHandlers};
pub use document::{document_routes, DocumentHandlers};
pub use error::ErrorResponse;
pub use metadata::{command_metadata, CORRELATION_ID_HEADER};
pub use router::app_router;
