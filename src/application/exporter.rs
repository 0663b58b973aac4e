//! Poll-and-publish loop shared by the poller and the pusher.
//!
//! A tick queries the repository once and emits every chain through the
//! sink, one after another. The sleep only starts once the tick is done, so
//! ticks never overlap and a slow tick pushes the next one back.

use crate::domain::ports::MetricSink;
use crate::domain::repositories::EpochRepository;
use anyhow::{Result, bail};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Outcome of a single tick
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub timestamp: String,
    pub sink: &'static str,
    /// Every chain the query returned, in emission order.
    pub chains: Vec<String>,
    pub emitted: Vec<String>,
    pub failed: Vec<String>,
    pub duration_ms: u64,
}

pub struct Exporter {
    repository: Arc<dyn EpochRepository>,
    sink: Arc<dyn MetricSink>,
    interval: Duration,
}

impl Exporter {
    pub fn new(
        repository: Arc<dyn EpochRepository>,
        sink: Arc<dyn MetricSink>,
        interval: Duration,
    ) -> Self {
        Self {
            repository,
            sink,
            interval,
        }
    }

    /// Query once and emit every chain.
    ///
    /// A query failure fails the whole tick. A failure for one chain is
    /// logged and recorded in the report, and the remaining chains are still
    /// emitted.
    pub async fn run_tick(&self) -> Result<TickReport> {
        let started = Instant::now();
        let epochs = self.repository.max_nonzero_epochs().await?;

        if epochs.is_empty() {
            info!("No chain has a non-zero share count; nothing to emit");
        }

        let chains: Vec<String> = epochs.chains().map(str::to_string).collect();
        let mut emitted = Vec::with_capacity(epochs.len());
        let mut failed = Vec::new();

        for (chain, epoch) in epochs.iter() {
            match self.sink.emit(chain, epoch).await {
                Ok(()) => emitted.push(chain.to_string()),
                Err(e) => {
                    warn!("Failed to emit {} via {}: {}", chain, self.sink.name(), e);
                    failed.push(chain.to_string());
                }
            }
        }

        Ok(TickReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            sink: self.sink.name(),
            chains,
            emitted,
            failed,
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Run one tick and log its outcome. Never fails.
    pub async fn tick(&self) -> Option<TickReport> {
        match self.run_tick().await {
            Ok(report) => {
                log_report(&report);
                Some(report)
            }
            Err(e) => {
                error!("Tick failed, retrying in {:?}: {:#}", self.interval, e);
                None
            }
        }
    }

    /// Run a single tick for `--once` mode.
    ///
    /// Unlike [`Exporter::tick`], a query failure or any chain that failed
    /// to emit is returned as an error so the process exits non-zero.
    pub async fn run_once(&self) -> Result<TickReport> {
        let report = self.run_tick().await?;
        log_report(&report);

        if !report.failed.is_empty() {
            bail!(
                "Failed to emit {} of {} chains via {}: {}",
                report.failed.len(),
                report.chains.len(),
                report.sink,
                report.failed.join(", ")
            );
        }
        Ok(report)
    }

    /// Tick, then sleep for the interval, forever.
    pub async fn run(&self) {
        info!(
            "Exporter: Starting {} loop (interval: {:?})",
            self.sink.name(),
            self.interval
        );

        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }
}

fn log_report(report: &TickReport) {
    match serde_json::to_string(report) {
        // Prefixed so log shippers can pick the line out
        Ok(json) => println!("TICK_JSON:{}", json),
        Err(e) => warn!("Failed to serialize tick report: {}", e),
    }
    info!(
        "Tick done: {} emitted, {} failed in {}ms",
        report.emitted.len(),
        report.failed.len(),
        report.duration_ms
    );
}
