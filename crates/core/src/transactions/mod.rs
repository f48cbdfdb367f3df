//! Transactions module - domain model and reimbursement helpers.

mod transactions_model;

// Re-export the public interface
pub use transactions_model::{Reimbursement, ReimbursementStatus, Transaction};
