//! Client-side view of a remote document query.

use serde::{Deserialize, Serialize};

/// Fetch lifecycle of a document collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum FetchStatus {
    /// The query has not been issued yet.
    #[default]
    Pending,
    /// The query is in flight.
    Loading,
    /// The query completed and `data` is usable.
    Loaded,
    /// The query failed; `data` holds the last known documents.
    Failed,
}

/// A queried collection of documents with its fetch status.
///
/// Mirrors what the remote-document client hands to the rendering layer:
/// the documents plus enough state to distinguish "empty" from "not loaded
/// yet". Derivation code must treat non-loaded collections as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
    pub fetch_status: FetchStatus,
}

impl<T> Collection<T> {
    /// A collection whose query completed.
    pub fn loaded(data: Vec<T>) -> Self {
        Self {
            data,
            fetch_status: FetchStatus::Loaded,
        }
    }

    /// A collection whose query is still in flight.
    pub fn loading() -> Self {
        Self {
            data: Vec::new(),
            fetch_status: FetchStatus::Loading,
        }
    }

    /// True while the collection has not produced usable data yet.
    pub fn is_loading(&self) -> bool {
        matches!(self.fetch_status, FetchStatus::Pending | FetchStatus::Loading)
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            fetch_status: FetchStatus::Pending,
        }
    }
}
