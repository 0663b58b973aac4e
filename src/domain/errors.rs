use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while emitting the metric for a single chain.
///
/// An `EmitError` only ever skips the chain it was raised for; the rest of
/// the tick carries on.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Invalid chain key {chain:?}: must match [A-Za-z_][A-Za-z0-9_]*")]
    InvalidKey { chain: String },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build metric for {chain}: {source}")]
    Metric {
        chain: String,
        #[source]
        source: prometheus::Error,
    },

    #[error("Push to {url} failed: {source}")]
    PushTransport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Push to {url} rejected with status {status}: {body}")]
    PushRejected {
        url: String,
        status: u16,
        body: String,
    },
}
