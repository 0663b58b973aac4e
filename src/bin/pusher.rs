//! Epoch Pusher - Pushgateway output
//!
//! Polls the ops database for the highest epoch with a non-zero share count
//! per chain and pushes each as a `<chain>_max_epoch_nonzero` gauge to a
//! Prometheus Pushgateway, grouped by chain.
//!
//! # Usage
//! ```sh
//! pusher --ops-dsn 'user:password@tcp(host:3306)/ops_db' --gateway-url http://pushgateway:9091 --interval 5
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use epoch_exporter::application::Exporter;
use epoch_exporter::config::{PusherConfig, mask_password};
use epoch_exporter::infrastructure::observability::logging::init_tracing;
use epoch_exporter::infrastructure::{Database, PushgatewaySink, SqlEpochRepository};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = PusherConfig::parse();
    init_tracing();

    info!("Epoch Pusher {} starting...", env!("CARGO_PKG_VERSION"));

    let dsn = config.database.connection_url()?;
    info!(
        "Configuration loaded: DSN={}, Gateway={}, Interval={}m",
        mask_password(&dsn),
        config.gateway_url,
        config.schedule.interval
    );

    let database = Database::connect(&dsn)
        .await
        .context("Failed to open ops connection")?;

    let exporter = Exporter::new(
        Arc::new(SqlEpochRepository::new(database.clone())),
        Arc::new(PushgatewaySink::new(config.gateway_url.clone())),
        config.schedule.interval(),
    );

    let outcome = if config.schedule.once {
        exporter.run_once().await.map(|_| ())
    } else {
        tokio::select! {
            _ = exporter.run() => Ok(()),
            signal = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received. Exiting...");
                signal.map_err(anyhow::Error::from)
            }
        }
    };

    database.close().await;
    outcome
}
