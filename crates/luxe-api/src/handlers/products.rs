//! Catalog product endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use luxe_core::domain::{Product, ProductFilter, ProductSort};
use luxe_shared::Pagination;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::handlers::MessageResponse;
use crate::middleware::AdminGuard;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub status: Option<String>,
}

impl ProductListQuery {
    fn filter(&self) -> ProductFilter {
        let non_empty = |v: &Option<String>| v.as_ref().filter(|s| !s.trim().is_empty()).cloned();
        ProductFilter {
            status: non_empty(&self.status).unwrap_or_else(|| ProductFilter::default().status),
            category: non_empty(&self.category),
            search: non_empty(&self.search),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub pages: u64,
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProductListQuery>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let pagination = Pagination::new(query.page, query.limit);
    let sort = ProductSort::parse(query.sort.as_deref());

    let page = state
        .catalog
        .list_products(&query.filter(), sort, pagination)
        .await?;

    Ok(Json(ProductListResponse {
        products: page.items,
        total: page.total,
        page: page.page,
        pages: page.pages,
    }))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.catalog.view_product(&id).await?))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    _guard: AdminGuard,
    ApiJson(product): ApiJson<Product>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.catalog.create_product(product).await?))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<String>,
    ApiJson(product): ApiJson<Product>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.catalog.update_product(&id, product).await?))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.catalog.delete_product(&id).await?;
    Ok(Json(MessageResponse::new("Product deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_values_ignored() {
        let query = ProductListQuery {
            search: Some("  ".to_string()),
            status: Some(String::new()),
            category: Some("Rings".to_string()),
            ..Default::default()
        };
        let filter = query.filter();
        assert_eq!(filter.status, "active");
        assert_eq!(filter.search, None);
        assert_eq!(filter.category.as_deref(), Some("Rings"));
    }
}
