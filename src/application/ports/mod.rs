mod dictionary_client;
mod text_recognizer;
mod usage_repository;

pub use dictionary_client::{DictionaryClient, DictionaryClientError};
pub use text_recognizer::{TextRecognizer, TextRecognizerError};
pub use usage_repository::{UsageRepository, UsageRepositoryError, UsageStats};
