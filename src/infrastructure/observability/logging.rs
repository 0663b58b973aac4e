use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install the stdout subscriber shared by both binaries.
///
/// `RUST_LOG` decides the filter when set; otherwise INFO and above is shown.
pub fn init_tracing() {
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .try_init();
}

fn default_filter() -> EnvFilter {
    EnvFilter::new("info")
}
