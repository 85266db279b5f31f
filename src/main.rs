use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paperdrop::storage::{ObjectStore, S3Gateway};
use paperdrop::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paperdrop=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Connect the storage gateway when the backend is configured; otherwise
    // the service still serves /api/config so the gaps are visible.
    let store = S3Gateway::from_config(&config.storage)?
        .map(|gateway| Arc::new(gateway) as Arc<dyn ObjectStore>);
    if store.is_none() {
        let status = config.storage.status();
        warn!(
            access_key = status.aws_access_key,
            secret_key = status.aws_secret_key,
            bucket = status.aws_bucket,
            "storage backend not configured; uploads will be rejected until it is"
        );
    }

    // Create shared state and router
    let state = AppState::new(config.clone(), store);
    let app = paperdrop::create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
