//! Dual-mode refresh coordination for the dashboard.
//!
//! While the user has no account yet, the dashboard needs to react to the
//! backend on its own: first to the appearance of a connector trigger,
//! then to the first imported accounts. Push notifications do the heavy
//! lifting; on mobile a resume/online listener re-fetches manually as a
//! fallback, since push does not survive the app being suspended.

use std::sync::Arc;

use log::{debug, warn};

use super::refresh_model::RefreshState;
use crate::accounts::Account;
use crate::client::{
    Collection, CollectionFetcherTrait, Doctype, RealtimeClientTrait, RealtimeEvent,
    ReplicationTrait, ResumeEventsTrait, Target,
};
use crate::errors::Result;
use crate::triggers::{konnector_slugs, Trigger};

/// Coordinates realtime subscriptions and manual refresh fallbacks.
///
/// Owned by the dashboard view; `mount`/`unmount` follow the view
/// lifecycle and `reconcile` runs after every collection update.
pub struct RefreshCoordinator {
    realtime: Arc<dyn RealtimeClientTrait>,
    fetcher: Arc<dyn CollectionFetcherTrait>,
    replication: Arc<dyn ReplicationTrait>,
    resume_events: Arc<dyn ResumeEventsTrait>,
    target: Target,
    state: RefreshState,
    // Subscription guards: stop/start are idempotent through these.
    account_subscribed: bool,
    trigger_subscribed: bool,
    resume_listening: bool,
}

impl RefreshCoordinator {
    pub fn new(
        realtime: Arc<dyn RealtimeClientTrait>,
        fetcher: Arc<dyn CollectionFetcherTrait>,
        replication: Arc<dyn ReplicationTrait>,
        resume_events: Arc<dyn ResumeEventsTrait>,
        target: Target,
    ) -> Self {
        Self {
            realtime,
            fetcher,
            replication,
            resume_events,
            target,
            state: RefreshState::default(),
            account_subscribed: false,
            trigger_subscribed: false,
            resume_listening: false,
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    /// Called when the dashboard view appears.
    pub fn mount(&mut self) {
        if let Err(e) = self.start_resume_listeners() {
            warn!("Refresh: could not register resume listeners: {e}");
        }
    }

    /// Called when the dashboard view goes away. Releases everything.
    pub fn unmount(&mut self) {
        let released = self
            .stop_trigger_subscription()
            .and_then(|_| self.stop_account_subscription())
            .and_then(|_| self.stop_resume_listeners());
        if let Err(e) = released {
            warn!("Refresh: could not release subscriptions on unmount: {e}");
        }
    }

    /// Reconfigures subscriptions from the current collections.
    ///
    /// Errors are logged and swallowed so a transport hiccup never takes
    /// the dashboard down; the coordinator stays in its last valid state.
    pub fn reconcile(&mut self, accounts: &Collection<Account>, triggers: &Collection<Trigger>) {
        if let Err(e) = self.try_reconcile(accounts, triggers) {
            warn!("Refresh: could not correctly configure realtime: {e}");
        }
    }

    fn try_reconcile(
        &mut self,
        accounts: &Collection<Account>,
        triggers: &Collection<Trigger>,
    ) -> Result<()> {
        if accounts.is_loading() || triggers.is_loading() {
            return Ok(());
        }

        if !accounts.data.is_empty() {
            self.stop_account_subscription()?;
            self.stop_trigger_subscription()?;
            self.stop_resume_listeners()?;
            self.state = RefreshState::Idle;
            return Ok(());
        }

        if konnector_slugs(&triggers.data).is_empty() {
            self.stop_account_subscription()?;
            self.start_trigger_subscription()?;
            self.state = RefreshState::WaitingForTriggers;
        } else {
            self.stop_trigger_subscription()?;
            self.start_account_subscription()?;
            self.state = RefreshState::FetchingAccounts;
        }
        Ok(())
    }

    /// Reacts to a realtime notification by re-querying the collection.
    ///
    /// On mobile the local store is replicated first so the re-query sees
    /// the new documents.
    pub async fn handle_realtime_event(&self, doctype: Doctype) {
        let refreshed = match doctype {
            Doctype::Account => self.refetch(Doctype::Account).await,
            Doctype::Trigger => self.refetch(Doctype::Trigger).await,
            other => {
                debug!("Refresh: ignoring realtime event for {other}");
                Ok(())
            }
        };
        if let Err(e) = refreshed {
            warn!("Refresh: could not refresh after realtime event: {e}");
        }
    }

    /// Resume/online fallback: re-fetch both collections.
    pub async fn handle_resume(&self) {
        if let Err(e) = self.fetcher.fetch_accounts().await {
            warn!("Refresh: could not re-fetch accounts on resume: {e}");
        }
        if let Err(e) = self.fetcher.fetch_triggers().await {
            warn!("Refresh: could not re-fetch triggers on resume: {e}");
        }
    }

    async fn refetch(&self, doctype: Doctype) -> Result<()> {
        if self.target.is_mobile() {
            self.replication.sync_now().await?;
        }
        match doctype {
            Doctype::Account => self.fetcher.fetch_accounts().await,
            Doctype::Trigger => self.fetcher.fetch_triggers().await,
            _ => Ok(()),
        }
    }

    fn start_account_subscription(&mut self) -> Result<()> {
        if !self.account_subscribed {
            self.realtime
                .subscribe(RealtimeEvent::Created, Doctype::Account)?;
            self.account_subscribed = true;
        }
        Ok(())
    }

    fn stop_account_subscription(&mut self) -> Result<()> {
        if self.account_subscribed {
            self.realtime
                .unsubscribe(RealtimeEvent::Created, Doctype::Account)?;
            self.account_subscribed = false;
        }
        Ok(())
    }

    fn start_trigger_subscription(&mut self) -> Result<()> {
        if !self.trigger_subscribed {
            self.realtime
                .subscribe(RealtimeEvent::Created, Doctype::Trigger)?;
            self.trigger_subscribed = true;
        }
        Ok(())
    }

    fn stop_trigger_subscription(&mut self) -> Result<()> {
        if self.trigger_subscribed {
            self.realtime
                .unsubscribe(RealtimeEvent::Created, Doctype::Trigger)?;
            self.trigger_subscribed = false;
        }
        Ok(())
    }

    fn start_resume_listeners(&mut self) -> Result<()> {
        if self.target.is_mobile() && !self.resume_listening {
            self.resume_events.register()?;
            self.resume_listening = true;
        }
        Ok(())
    }

    fn stop_resume_listeners(&mut self) -> Result<()> {
        if self.resume_listening {
            self.resume_events.deregister()?;
            self.resume_listening = false;
        }
        Ok(())
    }
}
