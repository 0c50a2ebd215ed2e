//! Store-wide settings

use std::sync::Arc;
use tracing::info;

use crate::domain::Settings;
use crate::error::DomainError;
use crate::repositories::SettingsRepository;

pub struct SettingsService {
    settings: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }

    /// The stored document, or the defaults written on first read.
    pub async fn get(&self) -> Result<Settings, DomainError> {
        if let Some(settings) = self.settings.get().await? {
            return Ok(settings);
        }
        let defaults = Settings::default();
        self.settings.upsert(&defaults).await?;
        info!("Initialized default store settings");
        Ok(defaults)
    }

    pub async fn update(&self, settings: Settings) -> Result<Settings, DomainError> {
        self.settings.upsert(&settings).await?;
        info!("Store settings updated");
        Ok(settings)
    }
}
