use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use submission_heatmap::config::{CliArgs, HeatmapConfig};
use submission_heatmap::dataset;
use submission_heatmap::server;
use submission_heatmap::state::HeatmapState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "submission_heatmap=info,tower_http=info".into()),
        )
        .init();

    let args = CliArgs::parse();
    info!("Starting submission-heatmap v{}", env!("CARGO_PKG_VERSION"));
    info!("Data dir: {:?}", args.data_dir);

    if !args.data_dir.is_dir() {
        error!("Data directory does not exist: {:?}", args.data_dir);
        std::process::exit(1);
    }

    let config = HeatmapConfig::from_args(args);
    info!("Calendar offset: {}", config.utc_offset);
    let port = config.port;

    let dataset = dataset::load_dataset(&config)?;
    let state = Arc::new(HeatmapState::new(config, dataset));
    info!("Default mode: {}", state.current_mode().await);

    let router = server::build_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on http://0.0.0.0:{}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
