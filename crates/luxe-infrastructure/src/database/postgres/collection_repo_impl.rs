//! PostgreSQL collection repository

use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use luxe_core::domain::Collection;
use luxe_core::error::DomainError;
use luxe_core::repositories::CollectionRepository;

use super::db_error;

pub struct PgCollectionRepository {
    pool: PgPool,
}

impl PgCollectionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionRepository for PgCollectionRepository {
    async fn list(&self, limit: usize) -> Result<Vec<Collection>, DomainError> {
        let rows: Vec<(Json<Collection>,)> = sqlx::query_as(
            r#"
            SELECT doc FROM collections
            ORDER BY COALESCE((doc->>'displayOrder')::int, 0) ASC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing collections"))?;

        Ok(rows.into_iter().map(|(Json(c),)| c).collect())
    }

    async fn create(&self, collection: &Collection) -> Result<Collection, DomainError> {
        sqlx::query("INSERT INTO collections (id, doc) VALUES ($1, $2)")
            .bind(&collection.id)
            .bind(Json(collection))
            .execute(&self.pool)
            .await
            .map_err(db_error("creating collection"))?;

        Ok(collection.clone())
    }

    async fn replace(&self, id: &str, collection: &Collection) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE collections SET doc = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(collection))
            .execute(&self.pool)
            .await
            .map_err(db_error("replacing collection"))?;

        Ok(result.rows_affected() > 0)
    }
}
