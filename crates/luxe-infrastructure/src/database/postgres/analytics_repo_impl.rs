//! PostgreSQL analytics sink

use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use luxe_core::domain::AnalyticsEvent;
use luxe_core::error::DomainError;
use luxe_core::repositories::AnalyticsRepository;

use super::db_error;

pub struct PgAnalyticsRepository {
    pool: PgPool,
}

impl PgAnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalyticsRepository for PgAnalyticsRepository {
    async fn insert(&self, event: &AnalyticsEvent) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO analytics (doc) VALUES ($1)")
            .bind(Json(event))
            .execute(&self.pool)
            .await
            .map_err(db_error("recording analytics event"))?;

        Ok(())
    }
}
