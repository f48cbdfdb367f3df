//! Refresh coordinator states.

use serde::{Deserialize, Serialize};

/// State of the refresh coordinator.
///
/// The coordinator keeps the accounts view fresh while the first bank
/// import is underway, then goes idle once accounts exist and regular
/// rendering takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RefreshState {
    /// No account and no connector configured yet: watch for new triggers.
    #[default]
    WaitingForTriggers,
    /// A connector is configured but accounts have not landed yet: watch
    /// for account creations.
    FetchingAccounts,
    /// Accounts exist; all subscriptions are released.
    Idle,
}
