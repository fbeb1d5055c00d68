use async_trait::async_trait;

use crate::application::ports::{EngineError, TranslationEngine};
use crate::domain::Language;

/// The standard engine: the public Google Translate endpoint. Deterministic
/// and sub-second, with lower semantic accuracy than the LLM engine.
pub struct GoogleTranslateEngine {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslateEngine {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| "https://translate.googleapis.com".to_string()),
        }
    }
}

#[async_trait]
impl TranslationEngine for GoogleTranslateEngine {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, EngineError> {
        let url = format!("{}/translate_a/single", self.base_url);

        tracing::debug!(source = %source, target = %target, "Sending text to standard translation engine");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("dt", "t"),
                ("sl", source.code()),
                ("tl", target.code()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| EngineError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EngineError::RateLimited);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(EngineError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EngineError::InvalidResponse(format!("body: {}", e)))?;

        // Payload shape: [[[translated, original, ...], ...], ...] where the
        // first element lists one entry per source sentence.
        let segments = payload
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| EngineError::InvalidResponse("missing segment list".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.trim().is_empty() {
            return Err(EngineError::InvalidResponse(
                "no translation segments in response".to_string(),
            ));
        }

        Ok(translated.trim().to_string())
    }
}
