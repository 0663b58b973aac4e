use crate::domain::epochs::is_valid_chain_key;
use crate::domain::errors::EmitError;
use crate::domain::ports::MetricSink;
use crate::infrastructure::observability::exposition::{shares_count_line, textfile_path};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Writes one `<chain>_max_epoch_nozero.prom` file per chain for the node
/// exporter textfile collector.
pub struct TextfileSink {
    output_dir: PathBuf,
    instance: String,
}

impl TextfileSink {
    pub fn new(output_dir: impl Into<PathBuf>, instance: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            instance: instance.into(),
        }
    }
}

#[async_trait]
impl MetricSink for TextfileSink {
    fn name(&self) -> &'static str {
        "textfile"
    }

    /// Truncate (or create) the chain's file and write its single line.
    async fn emit(&self, chain: &str, epoch: i64) -> Result<(), EmitError> {
        if !is_valid_chain_key(chain) {
            return Err(EmitError::InvalidKey {
                chain: chain.to_string(),
            });
        }

        let path = textfile_path(&self.output_dir, chain);
        info!("Writing metric to {}", path.display());

        tokio::fs::write(&path, shares_count_line(chain, &self.instance, epoch))
            .await
            .map_err(|source| EmitError::Write {
                path: path.clone(),
                source,
            })?;

        info!("Wrote {} = {} to {}", chain, epoch, path.display());
        Ok(())
    }
}
