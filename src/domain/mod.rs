//! Domain layer - aggregates, value objects and events.
//!
//! Free of I/O. Infrastructure is reached only through the traits in `ports`.

pub mod contract;
pub mod document;
pub mod foundation;
pub mod integration;
