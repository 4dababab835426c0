use std::sync::Arc;

use anyhow::Context;

use catalog_api::app::{build_app, SharedRepository};
use catalog_api::config::ServerConfig;
use catalog_products::InMemoryProductRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::default();
    catalog_observability::init(config.log_format);

    let repository: SharedRepository = Arc::new(InMemoryProductRepository::seeded());
    let app = build_app(repository);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!("server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
    }
}
