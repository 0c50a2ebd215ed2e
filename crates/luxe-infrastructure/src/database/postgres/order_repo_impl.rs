//! PostgreSQL order repository

use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use luxe_core::domain::order::PAYMENT_CONFIRMED;
use luxe_core::domain::{DateRange, Order};
use luxe_core::error::DomainError;
use luxe_core::repositories::OrderRepository;

use super::db_error;

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &Order) -> Result<Order, DomainError> {
        sqlx::query("INSERT INTO orders (id, doc) VALUES ($1, $2)")
            .bind(&order.id)
            .bind(Json(order))
            .execute(&self.pool)
            .await
            .map_err(db_error("creating order"))?;

        Ok(order.clone())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Order>, DomainError> {
        let rows: Vec<(Json<Order>,)> = sqlx::query_as(
            "SELECT doc FROM orders ORDER BY doc->>'createdAt' DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit as i64)
        .bind(skip as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing orders"))?;

        Ok(rows.into_iter().map(|(Json(o),)| o).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting orders"))?;

        Ok(count.max(0) as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError> {
        let row: Option<(Json<Order>,)> = sqlx::query_as("SELECT doc FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding order"))?;

        Ok(row.map(|(Json(o),)| o))
    }

    async fn replace(&self, id: &str, order: &Order) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE orders SET doc = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(order))
            .execute(&self.pool)
            .await
            .map_err(db_error("replacing order"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_confirmed(&self, range: &DateRange) -> Result<Vec<Order>, DomainError> {
        let rows: Vec<(Json<Order>,)> = sqlx::query_as(
            r#"
            SELECT doc FROM orders
            WHERE doc->'payment'->>'status' = $1
              AND ($2::text IS NULL OR doc->>'createdAt' >= $2)
              AND ($3::text IS NULL OR doc->>'createdAt' <= $3)
            ORDER BY doc->>'createdAt' ASC
            "#,
        )
        .bind(PAYMENT_CONFIRMED)
        .bind(range.start.as_deref())
        .bind(range.end.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("loading confirmed orders"))?;

        Ok(rows.into_iter().map(|(Json(o),)| o).collect())
    }
}
