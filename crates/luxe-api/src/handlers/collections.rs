//! Collection endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use luxe_core::domain::Collection;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::AdminGuard;
use crate::state::AppState;

/// GET /api/collections
pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<Vec<Collection>>, ApiError> {
    Ok(Json(state.catalog.list_collections().await?))
}

/// POST /api/collections
pub async fn create_collection(
    State(state): State<AppState>,
    _guard: AdminGuard,
    ApiJson(collection): ApiJson<Collection>,
) -> Result<Json<Collection>, ApiError> {
    Ok(Json(state.catalog.create_collection(collection).await?))
}

/// PUT /api/collections/{id}
pub async fn update_collection(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<String>,
    ApiJson(collection): ApiJson<Collection>,
) -> Result<Json<Collection>, ApiError> {
    Ok(Json(state.catalog.update_collection(&id, collection).await?))
}
