//! PostgreSQL settings repository (single row, id 1)

use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use luxe_core::domain::Settings;
use luxe_core::error::DomainError;
use luxe_core::repositories::SettingsRepository;

use super::db_error;

pub struct PgSettingsRepository {
    pool: PgPool,
}

impl PgSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn get(&self) -> Result<Option<Settings>, DomainError> {
        let row: Option<(Json<Settings>,)> = sqlx::query_as("SELECT doc FROM settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("reading settings"))?;

        Ok(row.map(|(Json(s),)| s))
    }

    async fn upsert(&self, settings: &Settings) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO settings (id, doc) VALUES (1, $1)
            ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc
            "#,
        )
        .bind(Json(settings))
        .execute(&self.pool)
        .await
        .map_err(db_error("writing settings"))?;

        Ok(())
    }
}
