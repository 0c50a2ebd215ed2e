use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::middleware::AdminGuard;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/admin/upload-image (multipart field `file`)
pub async fn upload_image(
    State(state): State<AppState>,
    _guard: AdminGuard,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    info!("Image upload request received");

    // Parse multipart form
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read field: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or("").to_string();
        let filename = field.file_name().map(|s| s.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

        let url = state
            .uploads
            .store_image(&content_type, filename.as_deref(), data.to_vec())
            .await?;
        return Ok(Json(UploadResponse { url }));
    }

    Err(ApiError::BadRequest("file required".to_string()))
}
