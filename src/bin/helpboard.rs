//! Serves the community help-request API.
//!
//! Usage:
//!
//! ```text
//! helpboard [--bind ADDR] [--data-dir DIR] [--data-file NAME] [--api-prefix PATH] [--log-filter FILTER]
//! ```
//!
//! Every flag also reads a `HELPBOARD_*` environment variable. The task
//! board is loaded from `<data-dir>/<data-file>` on the first request, or
//! seeded with demo tasks when the file is missing or unreadable.

use clap::Parser;
use helpboard::{
    config::ServerConfig,
    http,
    task::{
        adapters::file::JsonFileSnapshotRepository,
        services::{TaskLifecycleService, TaskStore},
    },
    telemetry,
};
use mockable::DefaultClock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ServerConfig::parse();
    config.validate()?;
    telemetry::init_tracing(&config.log_filter)?;

    let snapshots = JsonFileSnapshotRepository::open(&config.data_dir, config.data_file.clone())?;
    let store = TaskStore::new(Arc::new(snapshots), Arc::new(DefaultClock));
    let service = TaskLifecycleService::new(Arc::new(store));
    let app = http::app(service, &config.api_prefix);

    let listener = TcpListener::bind(config.bind).await?;
    info!(
        address = %config.bind,
        data_dir = %config.data_dir,
        data_file = %config.data_file,
        prefix = %config.api_prefix,
        "serving help requests"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
