use async_trait::async_trait;

use crate::application::ports::{EngineError, TranslationEngine};
use crate::domain::Language;

/// The LLM engine: a Gemini `generateContent` call prompted to preserve
/// agricultural terminology and register instead of translating word for
/// word. Latency is variable; the routing deadline is enforced by the caller,
/// not here.
pub struct GeminiEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            model: model.unwrap_or_else(|| "gemini-2.0-flash".to_string()),
        }
    }

    fn build_prompt(text: &str, source: Language, target: Language) -> String {
        format!(
            "You are a strict technical translator specialized in Agriculture.\n\
             Your task is to translate from {src} to {tgt}.\n\n\
             RULES:\n\
             1. Output ONLY the translated text.\n\
             2. Do not include phrases like \"Here is the translation\" or \"I can't translate\".\n\
             3. Maintain technical accuracy for crops, pests, and schemes.\n\
             4. If the input is not {src}, just translate it to the best of your ability into {tgt}.\n\n\
             TEXT TO TRANSLATE:\n\
             {text}",
            src = source.display_name(),
            tgt = target.display_name(),
            text = text
        )
    }
}

#[async_trait]
impl TranslationEngine for GeminiEngine {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, EngineError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let prompt = Self::build_prompt(text, source, target);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        tracing::debug!(model = %self.model, source = %source, target = %target, "Sending text to llm translation engine");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
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

        let translated = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| EngineError::InvalidResponse("missing candidate text".to_string()))?;

        Ok(translated.trim().to_string())
    }
}
