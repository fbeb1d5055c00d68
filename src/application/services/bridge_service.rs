use std::sync::Arc;

use crate::application::ports::{SpeechRecognizer, TranscriptionError, TranslationEngine};
use crate::application::services::{RoutingError, RoutingService};
use crate::domain::{Language, RoutingOverride, TranslationRequest, Utterance};

/// Composes transcription with the English bridge: non-English audio yields
/// both the native-script text and a routed English rendering, so downstream
/// consumers always receive English. Sequential by necessity since the bridge
/// depends on the transcription output.
pub struct BridgeService<R, S, L>
where
    R: SpeechRecognizer,
    S: TranslationEngine,
    L: TranslationEngine,
{
    recognizer: Arc<R>,
    routing: Arc<RoutingService<S, L>>,
}

impl<R, S, L> BridgeService<R, S, L>
where
    R: SpeechRecognizer,
    S: TranslationEngine,
    L: TranslationEngine,
{
    pub fn new(recognizer: Arc<R>, routing: Arc<RoutingService<S, L>>) -> Self {
        Self {
            recognizer,
            routing,
        }
    }

    pub async fn transcribe(
        &self,
        audio_data: &[u8],
        language: Language,
        chat_id: Option<&str>,
        mode: RoutingOverride,
    ) -> Result<BridgeOutcome, BridgeError> {
        if let Some(chat_id) = chat_id {
            tracing::info!(
                chat_id,
                language = %language,
                mode = %mode,
                "processing speech for chat session"
            );
        }

        let native_text = self.recognizer.recognize(audio_data, language).await?;
        let utterance = Utterance::new(native_text, language, chat_id.map(String::from));

        tracing::debug!(
            chars = utterance.text().chars().count(),
            language = %language,
            "transcription completed"
        );

        // English input needs no bridge; both fields carry the same text.
        if language == Language::English {
            let text = utterance.into_text();
            return Ok(BridgeOutcome {
                native_text: text.clone(),
                english_text: text,
                language,
                llm_used: false,
            });
        }

        let request =
            TranslationRequest::new(utterance.text(), language, Language::English, mode);
        let routed = self.routing.route(request).await?;

        Ok(BridgeOutcome {
            native_text: utterance.into_text(),
            llm_used: routed.llm_used(),
            english_text: routed.text,
            language,
        })
    }
}

/// Combined transcription + bridge result. `llm_used` reflects the routing
/// decision for the bridging call only.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeOutcome {
    pub native_text: String,
    pub english_text: String,
    pub language: Language,
    pub llm_used: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("translation: {0}")]
    Translation(#[from] RoutingError),
}
