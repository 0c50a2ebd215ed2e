//! Order endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use luxe_core::domain::{Order, OrderUpdate};
use luxe_shared::Pagination;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::handlers::MessageResponse;
use crate::middleware::AdminGuard;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: u64,
    pub page: u32,
    pub pages: u64,
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    ApiJson(order): ApiJson<Order>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.place(order).await?))
}

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
    _guard: AdminGuard,
    ApiQuery(query): ApiQuery<OrderListQuery>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let page = state
        .orders
        .list(Pagination::new(query.page, query.limit))
        .await?;

    Ok(Json(OrderListResponse {
        orders: page.items,
        total: page.total,
        page: page.page,
        pages: page.pages,
    }))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.get(&id).await?))
}

/// PUT /api/orders/{id}
pub async fn update_order(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<OrderUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.orders.update(&id, update).await?;
    Ok(Json(MessageResponse::new("Order updated")))
}
