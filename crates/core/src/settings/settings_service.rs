use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use super::settings_model::{defaulted_settings, is_configuration_setting, Settings};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;

/// Service resolving the user settings document.
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    async fn fetch_with_default(&self) -> Result<Settings> {
        let documents = self.repository.fetch_all().await?;
        let configuration = documents.into_iter().find(is_configuration_setting);

        if configuration.is_none() {
            info!("No settings yet, default settings are used");
        }

        Ok(defaulted_settings(configuration))
    }

    async fn save(&self, settings: &Settings) -> Result<Settings> {
        self.repository.save(settings).await
    }
}
