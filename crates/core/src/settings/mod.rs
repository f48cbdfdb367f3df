//! Settings module - user settings document and panel state.

mod settings_model;
mod settings_service;
mod settings_traits;

// Re-export the public interface
pub use settings_model::{
    defaulted_settings, is_configuration_setting, sync_panels_state, NotificationSettings,
    PanelAccountState, PanelState, PanelsState, Settings, ThresholdSetting,
};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
