//! Analytics tracking and sales reports

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{Map, Value};

use luxe_core::domain::{DateRange, Product, RevenueReport};
use luxe_shared::constants::DEFAULT_BESTSELLER_LIMIT;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::handlers::MessageResponse;
use crate::middleware::AdminGuard;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BestsellerQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RevenueQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// POST /api/analytics/track
pub async fn track_event(
    State(state): State<AppState>,
    _guard: AdminGuard,
    ApiJson(event): ApiJson<Map<String, Value>>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.reports.track(event).await?;
    Ok(Json(MessageResponse::new("Event tracked")))
}

/// GET /api/reports/bestsellers
pub async fn bestsellers(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BestsellerQuery>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_BESTSELLER_LIMIT);
    Ok(Json(state.reports.bestsellers(limit).await?))
}

/// GET /api/reports/revenue
pub async fn revenue(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<RevenueQuery>,
) -> Result<Json<RevenueReport>, ApiError> {
    let range = DateRange {
        start: query.start_date.filter(|s| !s.is_empty()),
        end: query.end_date.filter(|s| !s.is_empty()),
    };
    Ok(Json(state.reports.revenue(&range).await?))
}
