//! Paperwork - documents and contracts kept eventually consistent.
//!
//! Two bounded contexts share no storage. A document's content edit
//! travels as an integration message through an outbox and a message
//! broker, and resets the "seen" flag of that attachment on every
//! unsigned contract.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
