//! Accounts module - domain models and virtual-account derivation.

mod accounts_constants;
mod accounts_model;
mod accounts_virtual;

// Re-export the public interface
pub use accounts_constants::*;
pub use accounts_model::{Account, AccountType};
pub use accounts_virtual::build_virtual_accounts;
