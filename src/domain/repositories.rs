//! Repository abstraction over the share accounting store.
//!
//! The exporter only needs one read: the latest epoch per chain that still
//! recorded shares. Keeping it behind a trait lets the scheduling loop be
//! tested without a database.

use crate::domain::epochs::ChainEpochs;
use anyhow::Result;
use async_trait::async_trait;

/// Source of per-chain epoch aggregates
#[async_trait]
pub trait EpochRepository: Send + Sync {
    /// Highest epoch per chain among rows with a non-zero share count.
    ///
    /// Chains with no such rows are absent from the result.
    async fn max_nonzero_epochs(&self) -> Result<ChainEpochs>;
}
