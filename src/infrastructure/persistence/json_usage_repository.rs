use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{UsageRepository, UsageRepositoryError, UsageStats};

/// Usage counters persisted as a small JSON file next to the service.
///
/// Counters are loaded once at startup and written back on every recording,
/// so the file always reflects the latest state.
pub struct JsonFileUsageRepository {
    path: PathBuf,
    stats: Mutex<UsageStats>,
}

impl JsonFileUsageRepository {
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, UsageRepositoryError> {
        let path = path.into();
        let stats = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| UsageRepositoryError::StorageFailed(e.to_string()))?,
            Err(e) if e.kind() == ErrorKind::NotFound => UsageStats::default(),
            Err(e) => return Err(UsageRepositoryError::StorageFailed(e.to_string())),
        };

        Ok(Self {
            path,
            stats: Mutex::new(stats),
        })
    }
}

#[async_trait]
impl UsageRepository for JsonFileUsageRepository {
    async fn record_recovery(&self, words_parsed: u64) -> Result<(), UsageRepositoryError> {
        let mut stats = self.stats.lock().await;
        stats.images_processed += 1;
        stats.words_parsed += words_parsed;

        let bytes = serde_json::to_vec_pretty(&*stats)
            .map_err(|e| UsageRepositoryError::StorageFailed(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| UsageRepositoryError::StorageFailed(e.to_string()))?;

        Ok(())
    }

    async fn snapshot(&self) -> Result<UsageStats, UsageRepositoryError> {
        Ok(*self.stats.lock().await)
    }
}
