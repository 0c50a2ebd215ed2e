use axum::{extract::State, Json};

use luxe_core::domain::Settings;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::middleware::AdminGuard;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> Result<Json<Settings>, ApiError> {
    Ok(Json(state.settings.get().await?))
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    _guard: AdminGuard,
    ApiJson(settings): ApiJson<Settings>,
) -> Result<Json<Settings>, ApiError> {
    Ok(Json(state.settings.update(settings).await?))
}
