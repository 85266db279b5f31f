// Paperdrop - validating PDF upload gateway backed by S3-compatible storage

pub mod admission;
pub mod config;
pub mod keys;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod storage;
pub mod types;
pub mod upload;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
