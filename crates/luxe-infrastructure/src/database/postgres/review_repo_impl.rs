//! PostgreSQL review repository

use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use luxe_core::domain::{Review, ReviewStatus};
use luxe_core::error::DomainError;
use luxe_core::repositories::ReviewRepository;

use super::db_error;

pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, review: &Review) -> Result<Review, DomainError> {
        sqlx::query("INSERT INTO reviews (id, doc) VALUES ($1, $2)")
            .bind(&review.id)
            .bind(Json(review))
            .execute(&self.pool)
            .await
            .map_err(db_error("creating review"))?;

        Ok(review.clone())
    }

    async fn find(
        &self,
        product_id: Option<String>,
        status: Option<ReviewStatus>,
        limit: usize,
    ) -> Result<Vec<Review>, DomainError> {
        let rows: Vec<(Json<Review>,)> = sqlx::query_as(
            r#"
            SELECT doc FROM reviews
            WHERE ($1::text IS NULL OR doc->>'productId' = $1)
              AND ($2::text IS NULL OR doc->>'status' = $2)
            ORDER BY doc->>'createdAt' DESC
            LIMIT $3
            "#,
        )
        .bind(product_id)
        .bind(status.map(|s| s.as_str()))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing reviews"))?;

        Ok(rows.into_iter().map(|(Json(r),)| r).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, DomainError> {
        let row: Option<(Json<Review>,)> = sqlx::query_as("SELECT doc FROM reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding review"))?;

        Ok(row.map(|(Json(r),)| r))
    }

    async fn replace(&self, id: &str, review: &Review) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE reviews SET doc = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(review))
            .execute(&self.pool)
            .await
            .map_err(db_error("replacing review"))?;

        Ok(result.rows_affected() > 0)
    }
}
