//! Dashboard module - balance view derivation and panel persistence.

mod dashboard_model;
mod dashboard_service;

// Re-export the public interface
pub use dashboard_model::{
    checked_accounts, derive_dashboard, DashboardCollections, DashboardData, DashboardView,
};
pub use dashboard_service::{DashboardService, PANEL_SAVE_DEBOUNCE};
