//! Settings repository trait (port)

use async_trait::async_trait;

use crate::domain::Settings;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<Settings>, DomainError>;
    async fn upsert(&self, settings: &Settings) -> Result<(), DomainError>;
}
