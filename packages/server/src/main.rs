use std::sync::Arc;

use anyhow::Context;
use tracing::{Level, info};

use campus_events::config::AppConfig;
use campus_events::database::init_db;
use campus_events::extractors::identity::HeaderIdentity;
use campus_events::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let db = init_db(&config.database)
        .await
        .context("Failed to initialize database")?;
    let identity = HeaderIdentity::new(&config.identity.header)
        .with_context(|| format!("Invalid identity header '{}'", config.identity.header))?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        db,
        identity: Arc::new(identity),
        config,
    };
    let app = campus_events::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    info!("Server running at http://{}", addr);
    info!("API reference at http://{}/scalar", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
