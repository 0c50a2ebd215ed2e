// ============================================================================
// Luxe Infrastructure - PostgreSQL Admin Store
// File: crates/luxe-infrastructure/src/database/postgres/admin_store_impl.rs
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{types::Json, PgPool};

use luxe_core::domain::AdminKey;
use luxe_core::error::DomainError;
use luxe_core::repositories::AdminStore;

use super::db_error;

pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn get(&self, key: AdminKey) -> Result<Option<Value>, DomainError> {
        let row: Option<(Json<Value>,)> = sqlx::query_as("SELECT value FROM admin WHERE key = $1")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("reading admin record"))?;

        Ok(row.map(|(Json(value),)| value))
    }

    async fn set(&self, key: AdminKey, value: Value) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO admin (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
            "#,
        )
        .bind(key.as_str())
        .bind(Json(value))
        .execute(&self.pool)
        .await
        .map_err(db_error("writing admin record"))?;

        Ok(())
    }

    async fn delete(&self, key: AdminKey) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM admin WHERE key = $1")
            .bind(key.as_str())
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting admin record"))?;

        Ok(())
    }
}
