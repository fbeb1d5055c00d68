use async_trait::async_trait;

use crate::domain::Language;

/// Speech-to-text collaborator. Audio format normalization happens before
/// this boundary; implementations receive ready-to-send audio bytes.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(
        &self,
        audio_data: &[u8],
        language: Language,
    ) -> Result<String, TranscriptionError>;
}

/// Transcription failures are a distinct category from translation failures
/// so callers can tell "could not understand audio" from "could not
/// translate text".
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("speech could not be understood")]
    NotUnderstood,
    #[error("speech service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
