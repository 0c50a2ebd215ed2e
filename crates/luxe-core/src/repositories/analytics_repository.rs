//! Analytics event sink (port)

use async_trait::async_trait;

use crate::domain::AnalyticsEvent;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    async fn insert(&self, event: &AnalyticsEvent) -> Result<(), DomainError>;
}
