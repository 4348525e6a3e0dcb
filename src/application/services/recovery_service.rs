use std::sync::Arc;

use futures::future::join_all;

use crate::application::ports::{DictionaryClient, DictionaryClientError};
use crate::application::services::ranking;
use crate::domain::{Dictionary, MaskedToken, RankedMatch};

/// The whole recovery pipeline behind one entry point: normalize the OCR
/// text into masked tokens, look every token up concurrently, rank the
/// candidates per token.
pub struct RecoveryService<D>
where
    D: DictionaryClient,
{
    dictionary_client: Arc<D>,
}

impl<D> RecoveryService<D>
where
    D: DictionaryClient,
{
    pub fn new(dictionary_client: Arc<D>) -> Self {
        Self { dictionary_client }
    }

    /// Flat mode: one display string per produced token, in token order.
    pub async fn recover(
        &self,
        raw_text: &str,
        limit: usize,
        dictionaries: Option<&[Dictionary]>,
    ) -> Result<Vec<RankedMatch>, RecoveryError> {
        let paired = self.recover_paired(raw_text, limit, dictionaries).await?;
        Ok(paired.into_iter().map(|(_, matches)| matches).collect())
    }

    /// Paired mode: every match string next to the masked token it answers.
    pub async fn recover_paired(
        &self,
        raw_text: &str,
        limit: usize,
        dictionaries: Option<&[Dictionary]>,
    ) -> Result<Vec<(MaskedToken, RankedMatch)>, RecoveryError> {
        let dictionaries = dictionaries.unwrap_or(Dictionary::default_set());
        let tokens = MaskedToken::normalize_text(raw_text);
        tracing::debug!(tokens = tokens.len(), "Normalized OCR text");

        let candidate_lists = self.gather_all(&tokens, dictionaries).await?;

        Ok(tokens
            .into_iter()
            .zip(candidate_lists)
            .map(|(token, candidates)| {
                let matches = ranking::rank(&token, &candidates, limit);
                (token, matches)
            })
            .collect())
    }

    /// One lookup future per token over the shared client session; results
    /// come back index-aligned with the tokens no matter in which order the
    /// requests complete.
    async fn gather_all(
        &self,
        tokens: &[MaskedToken],
        dictionaries: &[Dictionary],
    ) -> Result<Vec<Vec<String>>, RecoveryError> {
        let lookups = tokens
            .iter()
            .map(|token| self.dictionary_client.lookup(token, dictionaries));
        let results = join_all(lookups).await;

        let total = results.len();
        let mut failed = 0;
        let mut first_error = None;
        let mut candidate_lists = Vec::with_capacity(total);

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(candidates) => candidate_lists.push(candidates),
                Err(error) => {
                    // One token's transport failure degrades to "no
                    // candidates" at its index; siblings are unaffected.
                    tracing::warn!(index, %error, "Lookup failed, token gets no candidates");
                    failed += 1;
                    if first_error.is_none() {
                        first_error = Some(error);
                    }
                    candidate_lists.push(Vec::new());
                }
            }
        }

        // Every single lookup failing at the transport level means the
        // dictionary source itself is unreachable; that is the one failure
        // worth surfacing to the caller as a whole-batch error.
        if total > 0 && failed == total {
            if let Some(error) = first_error {
                return Err(RecoveryError::DictionaryUnavailable(error));
            }
        }

        Ok(candidate_lists)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecoveryError {
    #[error("dictionary source unavailable: {0}")]
    DictionaryUnavailable(DictionaryClientError),
}
