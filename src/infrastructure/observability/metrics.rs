//! Prometheus gauges pushed to the Pushgateway.
//!
//! Every push gets a fresh registry holding exactly one gauge, so nothing from
//! an earlier chain or tick leaks into the payload.

use prometheus::{Encoder, Gauge, Opts, Registry, TextEncoder};

/// Gauge name suffix of every pushed metric.
pub const GAUGE_SUFFIX: &str = "_max_epoch_nonzero";

/// One chain's gauge, rendered in text exposition format.
pub struct EpochGauge {
    registry: Registry,
}

impl EpochGauge {
    /// Register `<chain>_max_epoch_nonzero` and set it to `epoch`.
    pub fn new(chain: &str, epoch: i64) -> prometheus::Result<Self> {
        let registry = Registry::new();

        let gauge = Gauge::with_opts(Opts::new(
            format!("{chain}{GAUGE_SUFFIX}"),
            format!("Highest epoch with a non-zero share count for {chain}"),
        ))?;
        registry.register(Box::new(gauge.clone()))?;

        // Gauges are f64; epochs stay exact up to 2^53.
        gauge.set(epoch as f64);

        Ok(Self { registry })
    }

    /// Content type of [`EpochGauge::encode`] output.
    pub fn content_type() -> &'static str {
        prometheus::TEXT_FORMAT
    }

    /// Encode the registry in text exposition format.
    pub fn encode(&self) -> prometheus::Result<Vec<u8>> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(buffer)
    }
}
