//! Bills module - bill-to-transaction matching support.

mod bills_matching;

// Re-export the public interface
pub use bills_matching::{matching_date_range, DateRange};
