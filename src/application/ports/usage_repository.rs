use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Counters persisted across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub images_processed: u64,
    pub words_parsed: u64,
}

/// Records how much work the service has done: one image-processed event per
/// successful recovery and one words-parsed event per produced token.
#[async_trait]
pub trait UsageRepository: Send + Sync {
    async fn record_recovery(&self, words_parsed: u64) -> Result<(), UsageRepositoryError>;

    async fn snapshot(&self) -> Result<UsageStats, UsageRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UsageRepositoryError {
    #[error("storage failed: {0}")]
    StorageFailed(String),
}
