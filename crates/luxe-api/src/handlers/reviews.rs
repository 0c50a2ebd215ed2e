//! Review endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use luxe_core::domain::{Review, ReviewStatus, ReviewUpdate};

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::handlers::MessageResponse;
use crate::middleware::AdminGuard;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListQuery {
    pub product_id: Option<String>,
    pub status: Option<String>,
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    ApiJson(review): ApiJson<Review>,
) -> Result<Json<Review>, ApiError> {
    Ok(Json(state.reviews.submit(review).await?))
}

/// GET /api/reviews
pub async fn list_reviews(
    State(state): State<AppState>,
    _guard: AdminGuard,
    ApiQuery(query): ApiQuery<ReviewListQuery>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let status = match query.status.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => Some(
            ReviewStatus::from_str(raw)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown review status: {}", raw)))?,
        ),
        None => None,
    };
    let product_id = query.product_id.filter(|p| !p.is_empty());

    Ok(Json(state.reviews.list(product_id, status).await?))
}

/// PUT /api/reviews/{id}
pub async fn update_review(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<ReviewUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.reviews.moderate(&id, update).await?;
    Ok(Json(MessageResponse::new("Review updated")))
}
