//! Bankview Core - Domain entities, derivation pipeline, and traits.
//!
//! This crate contains the client-side business logic for the Bankview
//! banking dashboard: account/group normalization, balance aggregation,
//! group sorting, settings/panel-state persistence, and the refresh
//! coordinator. It is transport-agnostic and defines traits that are
//! implemented by the hosting application (document store, realtime
//! transport, replication, job launcher).

pub mod accounts;
pub mod bills;
pub mod categories;
pub mod client;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod flags;
pub mod groups;
pub mod refresh;
pub mod settings;
pub mod transactions;
pub mod triggers;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
