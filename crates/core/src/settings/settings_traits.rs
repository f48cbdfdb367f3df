//! Settings repository and service traits.

use async_trait::async_trait;

use super::settings_model::Settings;
use crate::errors::Result;

/// Contract for persisting settings documents in the remote store.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Fetches every settings document of the user.
    async fn fetch_all(&self) -> Result<Vec<Settings>>;

    /// Saves the settings document, overwriting the stored one.
    async fn save(&self, settings: &Settings) -> Result<Settings>;
}

/// Contract for settings operations exposed to the rendering layer.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Fetches the configuration settings, falling back to defaults when
    /// the user has none yet.
    async fn fetch_with_default(&self) -> Result<Settings>;

    /// Persists the settings document (read-modify-write, last write wins).
    async fn save(&self, settings: &Settings) -> Result<Settings>;
}
