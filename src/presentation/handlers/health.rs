use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::{SpeechRecognizer, TranslationEngine};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub environment: String,
    pub adapters: AdapterStatus,
}

#[derive(Serialize)]
pub struct AdapterStatus {
    pub standard: String,
    pub llm: String,
}

pub async fn health_handler<R, S, L>(State(state): State<AppState<R, S, L>>) -> impl IntoResponse
where
    R: SpeechRecognizer + 'static,
    S: TranslationEngine + 'static,
    L: TranslationEngine + 'static,
{
    let llm = if state.settings.llm_configured() {
        "configured"
    } else {
        "disabled"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: "speech-translation-gateway".to_string(),
            environment: state.settings.environment.to_string(),
            adapters: AdapterStatus {
                standard: "configured".to_string(),
                llm: llm.to_string(),
            },
        }),
    )
}
