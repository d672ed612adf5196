//! Storage adapters.
//!
//! - `InMemoryStore` - `Store` implementation over a shared map
//! - `StoreDocumentRepository` - Document repository and reader over a `Store`
//! - `StoreContractRepository` - Contract repository and reader over a `Store`

mod contract_store;
mod document_store;
mod in_memory_store;

pub use contract_store::{AttachmentModel, ContractModel, StoreContractRepository};
pub use document_store::{DocumentModel, StoreDocumentRepository};
pub use in_memory_store::InMemoryStore;
