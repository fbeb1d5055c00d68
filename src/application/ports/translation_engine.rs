use async_trait::async_trait;

use crate::domain::Language;

/// Uniform capability contract both translation providers satisfy: given
/// valid inputs, either return the translated text or signal failure. No
/// partial results.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: Language,
        target: Language,
    ) -> Result<String, EngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("unsupported language pair: {source_lang} -> {target}")]
    UnsupportedPair {
        source_lang: Language,
        target: Language,
    },
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
