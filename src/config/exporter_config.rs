use super::database_config::DatabaseArgs;
use clap::{Args, Parser};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_OUTPUT_DIR: &str = "/opt/node-exporter/prom";
pub const DEFAULT_INSTANCE: &str = "jumperserver";

/// Tick scheduling flags shared by both binaries
#[derive(Debug, Clone, Args)]
pub struct ScheduleArgs {
    /// Check interval in minutes
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Run a single tick and exit instead of looping
    #[arg(long)]
    pub once: bool,
}

impl ScheduleArgs {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval * 60)
    }
}

/// Textfile-collector variant
#[derive(Debug, Clone, Parser)]
#[command(
    name = "poller",
    author,
    version,
    about = "Write max non-zero epochs per chain as Prometheus textfile metrics",
    long_about = None
)]
pub struct PollerConfig {
    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Directory to write Prometheus metric files
    #[arg(long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Value of the `instance` label on every written metric
    #[arg(long, default_value = DEFAULT_INSTANCE)]
    pub instance: String,
}

/// Pushgateway variant
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pusher",
    author,
    version,
    about = "Push max non-zero epochs per chain to a Prometheus Pushgateway",
    long_about = None
)]
pub struct PusherConfig {
    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub schedule: ScheduleArgs,

    /// Pushgateway base URL, e.g. http://pushgateway:9091
    #[arg(long = "gateway-url", alias = "gatewayUrl", value_parser = parse_gateway_url)]
    pub gateway_url: Url,
}

fn parse_gateway_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("invalid URL: {}", e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("unsupported scheme '{}', expected http or https", other)),
    }
}
