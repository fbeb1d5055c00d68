use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ports::{SpeechRecognizer, TranslationEngine};
use crate::application::services::RoutingError;
use crate::domain::{Language, RoutingOverride, TranslationRequest};
use crate::infrastructure::observability::sanitize_utterance;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: Language,
    #[serde(default = "default_source_lang")]
    pub source_lang: Language,
    #[serde(default)]
    pub use_llm: Option<bool>,
}

fn default_source_lang() -> Language {
    Language::English
}

#[derive(Serialize)]
pub struct TranslateResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_lang: Language,
    pub target_lang: Language,
    pub llm_used: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn translate_handler<R, S, L>(
    State(state): State<AppState<R, S, L>>,
    Json(request): Json<TranslateRequest>,
) -> impl IntoResponse
where
    R: SpeechRecognizer + 'static,
    S: TranslationEngine + 'static,
    L: TranslationEngine + 'static,
{
    tracing::debug!(
        text = %sanitize_utterance(&request.text),
        source = %request.source_lang,
        target = %request.target_lang,
        "Processing translation"
    );

    let mode = RoutingOverride::from_use_llm(request.use_llm);
    let routed = state
        .routing_service
        .route(TranslationRequest::new(
            request.text.clone(),
            request.source_lang,
            request.target_lang,
            mode,
        ))
        .await;

    match routed {
        Ok(result) => {
            tracing::info!(llm_used = result.llm_used(), "Translation successful");
            (
                StatusCode::OK,
                Json(TranslateResponse {
                    original_text: request.text,
                    llm_used: result.llm_used(),
                    translated_text: result.text,
                    source_lang: request.source_lang,
                    target_lang: request.target_lang,
                }),
            )
                .into_response()
        }
        Err(e @ RoutingError::InvalidInput(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Translation unavailable");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
