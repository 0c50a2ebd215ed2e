// ============================================================================
// Luxe Infrastructure - PostgreSQL Product Repository
// File: crates/luxe-infrastructure/src/database/postgres/product_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{types::Json, PgPool};

use luxe_core::domain::{Product, ProductFilter, ProductSort, RatingSummary};
use luxe_core::error::DomainError;
use luxe_core::repositories::ProductRepository;

use super::db_error;

const FILTER: &str = r#"
    doc->>'status' = $1
    AND ($2::text IS NULL OR doc->>'category' = $2)
    AND ($3::text IS NULL
         OR doc->>'name' ILIKE $3 ESCAPE '\'
         OR doc->>'shortDescription' ILIKE $3 ESCAPE '\')
"#;

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_by(sort: ProductSort) -> &'static str {
    match sort {
        ProductSort::Newest => "doc->>'createdAt' DESC",
        ProductSort::PriceAsc => "(doc->>'basePrice')::float8 ASC",
        ProductSort::PriceDesc => "(doc->>'basePrice')::float8 DESC",
        ProductSort::Name => "doc->>'name' ASC",
    }
}

/// `%term%` with LIKE wildcards escaped, so search is a plain substring match.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Product>, DomainError> {
        let sql = format!(
            "SELECT doc FROM products WHERE {} ORDER BY {} LIMIT $4 OFFSET $5",
            FILTER,
            order_by(sort)
        );
        let rows: Vec<(Json<Product>,)> = sqlx::query_as(&sql)
            .bind(&filter.status)
            .bind(filter.category.as_deref())
            .bind(filter.search.as_deref().map(like_pattern))
            .bind(limit as i64)
            .bind(skip as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("listing products"))?;

        Ok(rows.into_iter().map(|(Json(p),)| p).collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, DomainError> {
        let sql = format!("SELECT COUNT(*) FROM products WHERE {}", FILTER);
        let (count,): (i64,) = sqlx::query_as(&sql)
            .bind(&filter.status)
            .bind(filter.category.as_deref())
            .bind(filter.search.as_deref().map(like_pattern))
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting products"))?;

        Ok(count.max(0) as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let row: Option<(Json<Product>,)> = sqlx::query_as("SELECT doc FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding product"))?;

        Ok(row.map(|(Json(p),)| p))
    }

    async fn increment_view_count(&self, id: &str) -> Result<Option<Product>, DomainError> {
        let row: Option<(Json<Product>,)> = sqlx::query_as(
            r#"
            UPDATE products
            SET doc = jsonb_set(doc, '{viewCount}',
                to_jsonb(COALESCE((doc->>'viewCount')::bigint, 0) + 1))
            WHERE id = $1
            RETURNING doc
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("incrementing product views"))?;

        Ok(row.map(|(Json(p),)| p))
    }

    async fn create(&self, product: &Product) -> Result<Product, DomainError> {
        sqlx::query("INSERT INTO products (id, doc) VALUES ($1, $2)")
            .bind(&product.id)
            .bind(Json(product))
            .execute(&self.pool)
            .await
            .map_err(db_error("creating product"))?;

        Ok(product.clone())
    }

    async fn replace(&self, id: &str, product: &Product) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE products SET doc = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(product))
            .execute(&self.pool)
            .await
            .map_err(db_error("replacing product"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting product"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn top_sellers(&self, limit: usize) -> Result<Vec<Product>, DomainError> {
        let rows: Vec<(Json<Product>,)> = sqlx::query_as(
            r#"
            SELECT doc FROM products
            WHERE doc->>'status' = 'active'
            ORDER BY COALESCE((doc->>'totalPurchases')::bigint, 0) DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("listing bestsellers"))?;

        Ok(rows.into_iter().map(|(Json(p),)| p).collect())
    }

    async fn update_rating(&self, id: &str, summary: RatingSummary) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE products
            SET doc = doc || jsonb_build_object('averageRating', $2::float8, 'reviewCount', $3::bigint)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(summary.average_rating)
        .bind(summary.review_count)
        .execute(&self.pool)
        .await
        .map_err(db_error("updating product rating"))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("pearl"), "%pearl%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
