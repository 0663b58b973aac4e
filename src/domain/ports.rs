use crate::domain::errors::EmitError;
use async_trait::async_trait;

/// Destination for one chain's metric.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Short name used in logs ("textfile", "pushgateway").
    fn name(&self) -> &'static str;

    /// Publish `epoch` for `chain`, overwriting whatever was published before.
    async fn emit(&self, chain: &str, epoch: i64) -> Result<(), EmitError>;
}
