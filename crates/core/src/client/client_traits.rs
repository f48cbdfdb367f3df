//! Traits implemented by the hosting application.
//!
//! These traits define the contract with the remote-document client, the
//! realtime transport and the mobile replication layer without pulling any
//! of their internals into the core.

use async_trait::async_trait;

use super::{Doctype, RealtimeEvent};
use crate::errors::Result;

/// Contract with the realtime push transport.
///
/// Subscriptions are keyed by `(event, doctype)`. Implementations are not
/// required to deduplicate subscriptions; callers guard against double
/// subscribes (see the refresh coordinator).
pub trait RealtimeClientTrait: Send + Sync {
    /// Starts delivering `event` notifications for `doctype`.
    fn subscribe(&self, event: RealtimeEvent, doctype: Doctype) -> Result<()>;

    /// Stops delivering `event` notifications for `doctype`.
    fn unsubscribe(&self, event: RealtimeEvent, doctype: Doctype) -> Result<()>;
}

/// Contract for re-issuing collection queries against the store.
///
/// Used by the refresh coordinator when a push notification or a lifecycle
/// event invalidates the local view.
#[async_trait]
pub trait CollectionFetcherTrait: Send + Sync {
    /// Re-runs the accounts query.
    async fn fetch_accounts(&self) -> Result<()>;

    /// Re-runs the connector triggers query.
    async fn fetch_triggers(&self) -> Result<()>;
}

/// Contract with the offline replication layer (mobile targets).
#[async_trait]
pub trait ReplicationTrait: Send + Sync {
    /// Restarts the replication loop so local queries see fresh documents.
    async fn sync_now(&self) -> Result<()>;
}

/// Contract for platform resume/online lifecycle listeners (mobile targets).
pub trait ResumeEventsTrait: Send + Sync {
    /// Registers the resume/online handler with the platform.
    fn register(&self) -> Result<()>;

    /// Removes the resume/online handler.
    fn deregister(&self) -> Result<()>;
}

/// No-op replication for targets without a local store.
#[derive(Clone, Default)]
pub struct NoopReplication;

#[async_trait]
impl ReplicationTrait for NoopReplication {
    async fn sync_now(&self) -> Result<()> {
        Ok(())
    }
}

/// No-op resume listeners for targets without lifecycle events.
#[derive(Clone, Default)]
pub struct NoopResumeEvents;

impl ResumeEventsTrait for NoopResumeEvents {
    fn register(&self) -> Result<()> {
        Ok(())
    }

    fn deregister(&self) -> Result<()> {
        Ok(())
    }
}
