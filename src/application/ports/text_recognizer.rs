use async_trait::async_trait;

/// Extracts raw text from an image. The recognizer is a black box: whatever
/// it returns is fed to token normalization as-is.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> Result<String, TextRecognizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextRecognizerError {
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),
}
