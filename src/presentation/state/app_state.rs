use std::sync::Arc;

use crate::application::ports::{DictionaryClient, TextRecognizer, UsageRepository};
use crate::application::services::RecoveryService;

pub struct AppState<D>
where
    D: DictionaryClient,
{
    pub recovery_service: Arc<RecoveryService<D>>,
    pub text_recognizer: Arc<dyn TextRecognizer>,
    pub usage_repository: Arc<dyn UsageRepository>,
    pub default_limit: usize,
}

impl<D> Clone for AppState<D>
where
    D: DictionaryClient,
{
    fn clone(&self) -> Self {
        Self {
            recovery_service: Arc::clone(&self.recovery_service),
            text_recognizer: Arc::clone(&self.text_recognizer),
            usage_repository: Arc::clone(&self.usage_repository),
            default_limit: self.default_limit,
        }
    }
}
