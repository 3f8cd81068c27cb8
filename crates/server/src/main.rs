use anyhow::Context;
use lawdesk_core::config::Config;
use log::{info, warn};
use server::{create_app_with_state, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set default log level if not already set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting lawdesk server");

    let config = Config::load_from_env().unwrap_or_else(|e| {
        warn!("Could not load config ({}), using development defaults", e);
        Config::development_from_env()
    });

    if config.cors.allow_any_origin {
        warn!("CORS allows any origin; do not expose this server publicly");
    }

    let state = Arc::new(AppState::from_config(&config));
    info!("Serving {} documents", state.store.len());

    let app = create_app_with_state(state, &config.cors);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;

    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
