// Shared error type for the HTTP surface.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::admission::RejectReason;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The payload failed an admission check. Client fault; no storage call
    /// was made.
    #[error(transparent)]
    Validation(#[from] RejectReason),

    #[error("No file provided")]
    MissingFile,

    #[error("{0}")]
    BadRequest(String),

    #[error("Storage backend is not configured")]
    NotConfigured,

    #[error("Storage error: {0}")]
    StorageUnavailable(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(RejectReason::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Validation(_) | AppError::MissingFile | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::StorageUnavailable(_) => tracing::error!("upload failed: {self}"),
            AppError::NotConfigured => tracing::warn!("upload refused: {self}"),
            _ => tracing::debug!("upload rejected: {self}"),
        }

        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
