use axum::{extract::State, routing::get, Json, Router};

use crate::models::{AppState, ConfigResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/api/config", get(config_status))
}

/// GET /api/config - report which storage settings are present.
async fn config_status(State(state): State<AppState>) -> Json<ConfigResponse> {
    let details = state.config.storage.status();

    Json(ConfigResponse {
        configured: details.configured(),
        details,
    })
}
