//! Configuration module.
//!
//! Both binaries are configured from command-line flags only. Shared flag
//! groups (database, schedule) are flattened into one parser per binary.

mod database_config;
mod exporter_config;

pub use database_config::{DatabaseArgs, mask_password, normalize_dsn};
pub use exporter_config::{
    DEFAULT_INSTANCE, DEFAULT_OUTPUT_DIR, PollerConfig, PusherConfig, ScheduleArgs,
};
