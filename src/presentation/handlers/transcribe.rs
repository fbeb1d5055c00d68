use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::application::ports::{SpeechRecognizer, TranscriptionError, TranslationEngine};
use crate::application::services::{BridgeError, RoutingError};
use crate::domain::{Language, RoutingOverride};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscribeResponse {
    pub native_text: String,
    pub english_text: String,
    pub language: Language,
    pub llm_used: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<R, S, L>(
    State(state): State<AppState<R, S, L>>,
    mut multipart: Multipart,
) -> Response
where
    R: SpeechRecognizer + 'static,
    S: TranslationEngine + 'static,
    L: TranslationEngine + 'static,
{
    let mut audio: Option<Vec<u8>> = None;
    let mut language = Language::English;
    let mut chat_id: Option<String> = None;
    let mut use_llm: Option<bool> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("malformed multipart body: {}", e),
                );
            }
        };

        match field.name() {
            Some("file") => match field.bytes().await {
                Ok(bytes) => audio = Some(bytes.to_vec()),
                Err(e) => {
                    return error_response(
                        StatusCode::BAD_REQUEST,
                        format!("could not read audio field: {}", e),
                    );
                }
            },
            Some("lang") => {
                let value = match field.text().await {
                    Ok(value) => value,
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            format!("could not read lang field: {}", e),
                        );
                    }
                };
                language = match value.parse() {
                    Ok(language) => language,
                    Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
                };
            }
            Some("chat_id") => {
                chat_id = field.text().await.ok().filter(|v| !v.is_empty());
            }
            Some("use_llm") => {
                use_llm = field.text().await.ok().and_then(|v| v.parse().ok());
            }
            _ => {}
        }
    }

    let Some(audio) = audio.filter(|a| !a.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "no audio file provided");
    };

    let mode = RoutingOverride::from_use_llm(use_llm);
    let outcome = state
        .bridge_service
        .transcribe(&audio, language, chat_id.as_deref(), mode)
        .await;

    match outcome {
        Ok(outcome) => {
            tracing::info!(
                language = %outcome.language,
                llm_used = outcome.llm_used,
                "Transcription successful"
            );
            (
                StatusCode::OK,
                Json(TranscribeResponse {
                    native_text: outcome.native_text,
                    english_text: outcome.english_text,
                    language: outcome.language,
                    llm_used: outcome.llm_used,
                }),
            )
                .into_response()
        }
        Err(BridgeError::Transcription(e)) => {
            tracing::warn!(error = %e, "Transcription failed");
            let status = match e {
                TranscriptionError::NotUnderstood => StatusCode::BAD_REQUEST,
                TranscriptionError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                TranscriptionError::ApiRequestFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error_response(status, e.to_string())
        }
        Err(BridgeError::Translation(e)) => {
            tracing::error!(error = %e, "Bridge translation failed");
            let status = match e {
                RoutingError::InvalidInput(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            };
            error_response(status, e.to_string())
        }
    }
}
