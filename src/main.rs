use anyhow::Context;
use homeservices_backend::config::{AppConfig, AppState};
use homeservices_backend::middleware::setup_logging;
use homeservices_backend::routes::create_router;
use homeservices_backend::store::SeedData;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    setup_logging();

    tracing::info!("Starting application...");

    // Load configuration
    let app_config = AppConfig::from_env().context("failed to load configuration")?;

    tracing::info!("Loaded configuration for environment: {}", app_config.environment);
    if app_config.is_production() {
        tracing::warn!("Entity store is in-memory; all data resets on restart");
    }

    // Seed the in-memory store
    let store = SeedData::load(app_config.seed_file.as_deref())
        .and_then(|seed| seed.into_store(app_config.bcrypt_cost))
        .context("failed to seed entity store")?;

    // Create AppState
    let app_state = AppState::new(store, app_config.clone());

    // Create router
    let app = create_router(app_state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Create server address
    let addr = app_config.server_address();
    tracing::info!("Server starting on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!(
        "{} v{} is running on {}",
        app_config.app_name,
        app_config.app_version,
        addr
    );

    axum::serve(listener, app).await?;

    Ok(())
}
