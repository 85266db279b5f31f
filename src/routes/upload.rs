use std::time::Duration;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use tracing::debug;

use crate::models::{AppState, UploadRequest, UploadResponse};
use crate::types::{AppError, AppResult};
use crate::upload::handle_upload;

pub fn router(state: &AppState) -> Router<AppState> {
    // Axum's default body cap is far below the configured maximum; leave
    // headroom for multipart framing so admission reports the size verdict.
    let body_limit = state.config.upload.max_file_size + 1024 * 1024;

    Router::new()
        .route("/api/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(body_limit))
}

/// POST /api/upload - validate and store one PDF.
async fn upload_file(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let request = read_file_field(multipart).await?;
    debug!(
        filename = %request.filename,
        size = request.data.len(),
        "upload received"
    );

    let outcome = handle_upload(
        &state.policy,
        state.store.as_deref(),
        state.config.storage.presign_ttl_secs,
        Duration::from_secs(state.config.upload.store_timeout_secs),
        request,
    )
    .await?;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        filename: outcome.filename,
        s3_key: outcome.key,
        presigned_url: outcome.presigned_url,
        file_size: outcome.size,
    }))
}

/// Pull the `file` field out of the multipart form. Shape errors (missing
/// field, unnamed file) are rejected here, before any admission logic runs.
async fn read_file_field(mut multipart: Multipart) -> AppResult<UploadRequest> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::BadRequest("No file selected".to_string()));
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file: {e}")))?;

        return Ok(UploadRequest {
            filename,
            content_type,
            data,
        });
    }

    Err(AppError::MissingFile)
}
