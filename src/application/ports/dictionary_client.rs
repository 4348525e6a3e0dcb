use async_trait::async_trait;

use crate::domain::{Dictionary, MaskedToken};

/// Looks a masked token up in one or more dictionary partitions and returns
/// the candidate words and phrases found there, in page order.
///
/// An empty list is the normal "nothing found" outcome; implementations fail
/// only when the dictionary source cannot be reached at the transport level.
#[async_trait]
pub trait DictionaryClient: Send + Sync {
    async fn lookup(
        &self,
        token: &MaskedToken,
        dictionaries: &[Dictionary],
    ) -> Result<Vec<String>, DictionaryClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictionaryClientError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("client build failed: {0}")]
    BuildFailed(String),
}
