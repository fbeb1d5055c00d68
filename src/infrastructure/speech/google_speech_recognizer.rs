use async_trait::async_trait;

use crate::application::ports::{SpeechRecognizer, TranscriptionError};
use crate::domain::Language;

/// Speech-to-text over the Google Speech API v2 endpoint. Expects audio
/// already normalized upstream; the declared language selects the
/// recognition locale.
pub struct GoogleSpeechRecognizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoogleSpeechRecognizer {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "http://www.google.com".to_string()),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechRecognizer {
    async fn recognize(
        &self,
        audio_data: &[u8],
        language: Language,
    ) -> Result<String, TranscriptionError> {
        let url = format!("{}/speech-api/v2/recognize", self.base_url);

        tracing::debug!(
            locale = language.recognition_locale(),
            bytes = audio_data.len(),
            "Sending audio to speech recognition provider"
        );

        let response = self
            .client
            .post(&url)
            .query(&[
                ("client", "chromium"),
                ("lang", language.recognition_locale()),
                ("key", self.api_key.as_str()),
            ])
            .header(reqwest::header::CONTENT_TYPE, "audio/x-flac; rate=16000")
            .body(audio_data.to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::ServiceUnavailable(format!("request: {}", e)))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(TranscriptionError::ServiceUnavailable(format!(
                "status {}",
                status
            )));
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        // The provider streams newline-delimited JSON; the first line with a
        // non-empty result list carries the transcript.
        for line in body.lines().filter(|l| !l.trim().is_empty()) {
            let Ok(parsed) = serde_json::from_str::<serde_json::Value>(line) else {
                continue;
            };
            if let Some(transcript) = parsed
                .pointer("/result/0/alternative/0/transcript")
                .and_then(|v| v.as_str())
            {
                let transcript = transcript.trim();
                if !transcript.is_empty() {
                    tracing::info!(chars = transcript.len(), "Transcription completed");
                    return Ok(transcript.to_string());
                }
            }
        }

        Err(TranscriptionError::NotUnderstood)
    }
}
