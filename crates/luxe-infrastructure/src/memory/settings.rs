use async_trait::async_trait;
use tokio::sync::RwLock;

use luxe_core::domain::Settings;
use luxe_core::error::DomainError;
use luxe_core::repositories::SettingsRepository;

#[derive(Default)]
pub struct MemorySettingsRepository {
    doc: RwLock<Option<Settings>>,
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn get(&self) -> Result<Option<Settings>, DomainError> {
        Ok(self.doc.read().await.clone())
    }

    async fn upsert(&self, settings: &Settings) -> Result<(), DomainError> {
        *self.doc.write().await = Some(settings.clone());
        Ok(())
    }
}
