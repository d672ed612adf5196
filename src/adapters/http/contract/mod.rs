//! HTTP adapter for contract endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ContractCommandResponse, CreateContractRequest, CreateContractResponse};
pub use handlers::ContractHandlers;
pub use routes::contract_routes;
