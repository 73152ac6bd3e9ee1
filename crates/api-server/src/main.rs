use application::{ReviewApp, TmdbClient, TmdbSettings};
use config::Config;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "api_server=debug,application=info,infrastructure=info,domain=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    info!("🚀 Starting Movie Review API Server");

    let config = Config::from_env()?;
    config.log_summary();
    warn!("⚠️  Passwords are stored and returned in plain text");

    let metadata_provider = Arc::new(TmdbClient::new(TmdbSettings {
        api_url: config.tmdb_api_url.clone(),
        api_key: config.tmdb_api_key.clone(),
        image_base_url: config.tmdb_image_base_url.clone(),
        language: config.tmdb_language.clone(),
        timeout: config.tmdb_timeout(),
    })?);

    let app = Arc::new(ReviewApp::new(
        &config.database_path,
        config.database_pool_size,
        metadata_provider,
    )?);
    let router = api_server::router(app);

    let bind_address = config.api_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🌐 API Server listening on http://{}", bind_address);
    info!("📖 API Documentation:");
    info!("   POST   /users              - Sign up");
    info!("   GET    /users              - List users");
    info!("   GET    /users/:id          - Get user");
    info!("   PUT    /users/:id          - Update user");
    info!("   GET    /users/:id/reviews  - Reviews written by a user");
    info!("   POST   /login              - Log in");
    info!("   POST   /movies             - Add movie");
    info!("   GET    /movies             - List movies");
    info!("   DELETE /movies/:id         - Delete movie");
    info!("   GET    /api/movies/:id     - TMDB details plus local reviews");
    info!("   POST   /reviews            - Add review");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Movie Review API Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
