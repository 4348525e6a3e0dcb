use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{TextRecognizer, TextRecognizerError};

/// Text recognition through the `tesseract` command line tool, image in on
/// stdin, recognized text out on stdout.
pub struct TesseractRecognizer {
    command: String,
    language: String,
}

impl TesseractRecognizer {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: &[u8]) -> Result<String, TextRecognizerError> {
        let mut child = Command::new(&self.command)
            .arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| TextRecognizerError::RecognitionFailed(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(image)
                .await
                .map_err(|e| TextRecognizerError::RecognitionFailed(e.to_string()))?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| TextRecognizerError::RecognitionFailed(e.to_string()))?;

        if !output.status.success() {
            return Err(TextRecognizerError::RecognitionFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
