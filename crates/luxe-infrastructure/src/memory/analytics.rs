use async_trait::async_trait;
use tokio::sync::Mutex;

use luxe_core::domain::AnalyticsEvent;
use luxe_core::error::DomainError;
use luxe_core::repositories::AnalyticsRepository;

#[derive(Default)]
pub struct MemoryAnalyticsRepository {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl MemoryAnalyticsRepository {
    pub async fn event_count(&self) -> usize {
        self.events.lock().await.len()
    }
}

#[async_trait]
impl AnalyticsRepository for MemoryAnalyticsRepository {
    async fn insert(&self, event: &AnalyticsEvent) -> Result<(), DomainError> {
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}
