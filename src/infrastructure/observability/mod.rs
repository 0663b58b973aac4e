//! Push-based observability
//!
//! Metrics leave the process through outbound channels only; there is no
//! HTTP server and no incoming requests:
//!
//! 1. **Textfile collector**: one `*.prom` file per chain, picked up by the node exporter
//! 2. **Prometheus Pushgateway**: one HTTP PUT per chain

pub mod exposition;
pub mod logging;
pub mod metrics;
pub mod pushgateway;
pub mod textfile;

pub use metrics::EpochGauge;
pub use pushgateway::PushgatewaySink;
pub use textfile::TextfileSink;
