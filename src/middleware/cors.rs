// CORS configuration
// Applied to the router in routes::create_router.

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;

/// Build the CORS layer from the configured origins. With no origins
/// configured the layer stays wide open, the development posture.
pub fn layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
