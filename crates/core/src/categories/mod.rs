//! Categories module - categorized spending aggregation.

mod categories_model;

// Re-export the public interface
pub use categories_model::{compute_category_data, transactions_by_category, CategoryData};
