use crate::domain::epochs::ChainEpochs;
use crate::domain::repositories::EpochRepository;
use crate::infrastructure::persistence::database::Database;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

const MAX_NONZERO_EPOCH_QUERY: &str = r#"
    SELECT chain, MAX(epoch) AS max_epoch
    FROM shares_epoch_counts
    WHERE share_count != 0
    GROUP BY chain
"#;

/// Reads epoch aggregates from the `shares_epoch_counts` table.
pub struct SqlEpochRepository {
    database: Database,
}

impl SqlEpochRepository {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

#[async_trait]
impl EpochRepository for SqlEpochRepository {
    async fn max_nonzero_epochs(&self) -> Result<ChainEpochs> {
        let rows = sqlx::query_as::<_, (String, Option<i64>)>(MAX_NONZERO_EPOCH_QUERY)
            .fetch_all(&self.database.pool)
            .await
            .context("Failed to query max non-zero epochs")?;

        let mut epochs = ChainEpochs::new();
        for (chain, max_epoch) in rows {
            match max_epoch {
                Some(epoch) => epochs.insert(chain, epoch),
                None => debug!("Skipping {}: MAX(epoch) is NULL", chain),
            }
        }

        Ok(epochs)
    }
}
