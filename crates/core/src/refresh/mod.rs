//! Refresh module - realtime/polling refresh coordination.

mod refresh_coordinator;
mod refresh_model;

// Re-export the public interface
pub use refresh_coordinator::RefreshCoordinator;
pub use refresh_model::RefreshState;
