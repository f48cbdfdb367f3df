//! Settings document model and panel-state derivation.
//!
//! There is a single settings document per user. Absent fields take their
//! defaults at decode time, so a partial document from the store always
//! yields a fully-populated `Settings`.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::CONFIGURATION_SETTINGS_ID;
use crate::groups::Group;

fn default_true() -> bool {
    true
}

fn default_settings_id() -> String {
    CONFIGURATION_SETTINGS_ID.to_string()
}

fn default_balance_lower_value() -> Decimal {
    Decimal::new(100, 0)
}

/// A notification threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSetting {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_balance_lower_value")]
    pub value: Decimal,
}

impl Default for ThresholdSetting {
    fn default() -> Self {
        Self {
            enabled: false,
            value: default_balance_lower_value(),
        }
    }
}

/// Notification thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(default)]
    pub balance_lower: ThresholdSetting,
}

/// UI state of one account row inside a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelAccountState {
    #[serde(default = "default_true")]
    pub checked: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Default for PanelAccountState {
    fn default() -> Self {
        Self {
            checked: true,
            disabled: false,
        }
    }
}

/// UI state of one group panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    #[serde(default = "default_true")]
    pub expanded: bool,
    #[serde(default)]
    pub accounts: BTreeMap<String, PanelAccountState>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            expanded: true,
            accounts: BTreeMap::new(),
        }
    }
}

/// Per-group panel expand/checked state, keyed by group id.
pub type PanelsState = BTreeMap<String, PanelState>;

/// The per-user settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_settings_id", rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub panels_state: PanelsState,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: default_settings_id(),
            notifications: NotificationSettings::default(),
            panels_state: PanelsState::new(),
        }
    }
}

/// True for the document holding the user configuration.
pub fn is_configuration_setting(settings: &Settings) -> bool {
    settings.id == CONFIGURATION_SETTINGS_ID
}

/// Returns the settings with defaults applied, starting from the stored
/// document when there is one.
pub fn defaulted_settings(settings: Option<Settings>) -> Settings {
    settings.unwrap_or_default()
}

/// Aligns the panels tree with the current group list.
///
/// Panels of vanished groups are dropped, new groups get a panel with
/// everything visible, and existing expand/checked flags are preserved.
/// New accounts appearing inside a known group start checked.
pub fn sync_panels_state(groups: &[Group], current: &PanelsState) -> PanelsState {
    let mut next = PanelsState::new();

    for group in groups {
        let existing = current.get(&group.id);
        let mut panel = PanelState {
            expanded: existing.map(|p| p.expanded).unwrap_or(true),
            accounts: BTreeMap::new(),
        };

        for account in group.member_accounts() {
            let state = existing
                .and_then(|p| p.accounts.get(&account.id))
                .cloned()
                .unwrap_or_default();
            panel.accounts.insert(account.id.clone(), state);
        }

        next.insert(group.id.clone(), panel);
    }

    next
}
