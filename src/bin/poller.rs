//! Epoch Poller - textfile collector output
//!
//! Polls the ops database for the highest epoch with a non-zero share count
//! per chain and writes each as `<output-dir>/<chain>_max_epoch_nozero.prom`
//! for the node exporter textfile collector.
//!
//! # Usage
//! ```sh
//! poller --ops-dsn 'user:password@tcp(host:3306)/ops_db' --output-dir /opt/node-exporter/prom --interval 5
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use epoch_exporter::application::Exporter;
use epoch_exporter::config::{PollerConfig, mask_password};
use epoch_exporter::infrastructure::observability::logging::init_tracing;
use epoch_exporter::infrastructure::{Database, SqlEpochRepository, TextfileSink};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = PollerConfig::parse();
    init_tracing();

    info!("Epoch Poller {} starting...", env!("CARGO_PKG_VERSION"));

    let dsn = config.database.connection_url()?;
    info!(
        "Configuration loaded: DSN={}, OutputDir={}, Instance={}, Interval={}m",
        mask_password(&dsn),
        config.output_dir.display(),
        config.instance,
        config.schedule.interval
    );

    if !config.output_dir.is_dir() {
        warn!(
            "Output directory {} does not exist; writes will fail until it is created",
            config.output_dir.display()
        );
    }

    let database = Database::connect(&dsn)
        .await
        .context("Failed to open ops connection")?;

    let exporter = Exporter::new(
        Arc::new(SqlEpochRepository::new(database.clone())),
        Arc::new(TextfileSink::new(&config.output_dir, &config.instance)),
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
