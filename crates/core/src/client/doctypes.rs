//! Doctype and realtime event identifiers shared with the backend.

use serde::{Deserialize, Serialize};

/// Document types stored in the remote document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Doctype {
    Account,
    Group,
    Transaction,
    Settings,
    Trigger,
    Bill,
}

impl Doctype {
    /// Stable wire name of the doctype.
    pub fn as_str(&self) -> &'static str {
        match self {
            Doctype::Account => "io.bankview.accounts",
            Doctype::Group => "io.bankview.groups",
            Doctype::Transaction => "io.bankview.operations",
            Doctype::Settings => "io.bankview.settings",
            Doctype::Trigger => "io.bankview.triggers",
            Doctype::Bill => "io.bankview.bills",
        }
    }
}

impl std::fmt::Display for Doctype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Realtime push events emitted by the backend per doctype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealtimeEvent {
    Created,
    Updated,
    Deleted,
}

/// Platform the application is running on.
///
/// Mobile targets replicate the document store locally and need resume
/// listeners as a fallback to push notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Desktop,
    Mobile,
}

impl Target {
    pub fn is_mobile(&self) -> bool {
        matches!(self, Target::Mobile)
    }
}
