// ============================================================================
// Luxe API - Admin Handlers
// File: crates/luxe-api/src/handlers/admin.rs
// ============================================================================
//! Admin session endpoints (login, logout, verify, change password)

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::handlers::MessageResponse;
use crate::middleware::AdminGuard;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Session as handed to the admin frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state.auth.login(&payload.password).await?;
    Ok(Json(LoginResponse {
        expires_at: session.expires_at_iso(),
        token: session.token,
    }))
}

/// POST /api/admin/logout
pub async fn logout(
    State(state): State<AppState>,
    AdminGuard(session): AdminGuard,
) -> Result<Json<MessageResponse>, ApiError> {
    state.auth.logout(&session).await?;
    Ok(Json(MessageResponse::new("Logged out")))
}

/// GET /api/admin/verify
pub async fn verify(_guard: AdminGuard) -> Json<VerifyResponse> {
    Json(VerifyResponse { valid: true })
}

/// POST /api/admin/change-password
pub async fn change_password(
    State(state): State<AppState>,
    AdminGuard(session): AdminGuard,
    ApiJson(payload): ApiJson<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .auth
        .change_password(&session, &payload.current_password, &payload.new_password)
        .await?;
    Ok(Json(MessageResponse::new("Password changed. Please login again.")))
}
