//! Zero Trust AKS sample API entry point.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use aks_sample_api::api::create_router;
use aks_sample_api::config::Config;
use aks_sample_api::utils::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    run().await?;

    Ok(())
}

/// Load configuration, bind the listener, and serve until terminated.
async fn run() -> aks_sample_api::Result<()> {
    let config = Config::load()?;
    info!(port = config.port, "Configuration loaded");

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("HTTP server listening on {}", listener.local_addr()?);

    let router = create_router();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
