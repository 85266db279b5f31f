//! API Routes
//!
//! - `/api/upload` - PDF upload
//! - `/api/config` - storage configuration status
//! - `/api/health` - liveness

pub mod config;
pub mod health;
pub mod upload;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    Router::new()
        .merge(upload::router(&state))
        .merge(config::router())
        .merge(health::router())
        .layer(cors::layer(&state.config.server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
