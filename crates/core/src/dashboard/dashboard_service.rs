use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::warn;

use crate::groups::Group;
use crate::settings::{
    sync_panels_state, PanelAccountState, PanelState, PanelsState, Settings, SettingsServiceTrait,
};
use crate::utils::Debouncer;

/// Trailing window coalescing rapid panel toggles into a single write.
pub const PANEL_SAVE_DEBOUNCE: Duration = Duration::from_secs(3);

/// Holds the live panels state and persists it through the settings
/// service.
///
/// Toggles apply to the in-memory state immediately; the settings write is
/// debounced and fire-and-forget. A failed write is logged and the
/// in-memory state stays authoritative until the next save.
pub struct DashboardService {
    settings_service: Arc<dyn SettingsServiceTrait>,
    settings: Mutex<Settings>,
    panels: Arc<Mutex<PanelsState>>,
    debouncer: Debouncer,
}

impl DashboardService {
    pub fn new(settings_service: Arc<dyn SettingsServiceTrait>, settings: Settings) -> Self {
        let panels = settings.panels_state.clone();
        Self {
            settings_service,
            settings: Mutex::new(settings),
            panels: Arc::new(Mutex::new(panels)),
            debouncer: Debouncer::new(PANEL_SAVE_DEBOUNCE),
        }
    }

    /// Snapshot of the live panels state.
    pub fn panels(&self) -> PanelsState {
        self.panels.lock().unwrap().clone()
    }

    /// Replaces the base settings document, typically after a remote
    /// change. The live panels state is not overwritten.
    pub fn set_settings(&self, settings: Settings) {
        *self.settings.lock().unwrap() = settings;
    }

    /// Realigns the live panels state with the current group list.
    pub fn sync_with_groups(&self, groups: &[Group]) {
        let mut panels = self.panels.lock().unwrap();
        *panels = sync_panels_state(groups, &panels);
    }

    /// Expands or collapses a group panel and schedules a save.
    pub fn set_panel_expanded(&self, group_id: &str, expanded: bool) {
        {
            let mut panels = self.panels.lock().unwrap();
            panels
                .entry(group_id.to_string())
                .or_insert_with(PanelState::default)
                .expanded = expanded;
        }
        self.schedule_save();
    }

    /// Checks or unchecks an account row inside a group panel and
    /// schedules a save.
    pub fn set_account_checked(&self, group_id: &str, account_id: &str, checked: bool) {
        {
            let mut panels = self.panels.lock().unwrap();
            panels
                .entry(group_id.to_string())
                .or_insert_with(PanelState::default)
                .accounts
                .entry(account_id.to_string())
                .or_insert_with(PanelAccountState::default)
                .checked = checked;
        }
        self.schedule_save();
    }

    fn schedule_save(&self) {
        let service = self.settings_service.clone();
        let panels = self.panels.clone();
        let base = self.settings.lock().unwrap().clone();

        self.debouncer.call(move || async move {
            let settings = {
                let mut settings = base;
                settings.panels_state = panels.lock().unwrap().clone();
                settings
            };
            if let Err(e) = service.save(&settings).await {
                warn!("Dashboard: could not persist panel state: {e}");
            }
        });
    }
}
