//! Crate-wide constants.

/// Category id assigned to health expenses by the categorization backend.
pub const HEALTH_EXPENSES_CATEGORY_ID: &str = "400610";

/// Category id used when a transaction carries no category at all.
pub const UNCATEGORIZED_CATEGORY_ID: &str = "0";

/// Worker type of triggers that run a bank data connector.
pub const KONNECTOR_WORKER: &str = "konnector";

/// Document id of the per-user configuration settings document.
pub const CONFIGURATION_SETTINGS_ID: &str = "configuration";
