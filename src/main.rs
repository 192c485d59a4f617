use shopping_items::config::{ServerConfig, DEFAULT_LOG_FILTER};
use shopping_items::items::AppState;
use shopping_items::router::create_app_router;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::default();

    // Initialize application state
    let state = Arc::new(AppState::new());

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Server running on http://{}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
