use record_search::app::router;
use record_search::config::ServerConfig;
use record_search::dataset::generator::generate_dataset;
use record_search::dataset::store::DatasetStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = Arc::new(ServerConfig::from_args(&args)?);

    // 1. Initial dataset:
    let store = DatasetStore::new(generate_dataset(config.initial_size));
    tracing::info!("Initial dataset: {} records", store.len());

    // 2. HTTP Router:
    let app = router(store, config.clone());

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on http://{}", config.bind_addr);
    tracing::info!("Serving static files from {}", config.public_dir.display());
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
