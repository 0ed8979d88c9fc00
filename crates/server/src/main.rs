use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use jeepney_server::{ApiServer, Config, create_router, logging};
use jeepney_transit::{StaticRouteProvider, load_or_default};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    logging::init(config.verbose).context("Failed to install log subscriber")?;

    tracing::info!("Route data: {}", config.data.display());
    let dataset = load_or_default(&config.data);
    if dataset.is_empty() {
        tracing::warn!("No route data loaded, every query will come back empty");
    }
    let provider = StaticRouteProvider::from_dataset(dataset);

    let app = create_router(Arc::new(provider));
    let addr = config.bind_addr();
    let server = ApiServer::start(addr, app)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("Server running on port {}", server.port());

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;

    tracing::info!("Shutting down");
    server.shutdown().await.context("Server terminated with an error")
}
