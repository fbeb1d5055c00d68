use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{SpeechRecognizer, TranslationEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, transcribe_handler, translate_handler};
use crate::presentation::state::AppState;

const MAX_AUDIO_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router<R, S, L>(state: AppState<R, S, L>) -> Router
where
    R: SpeechRecognizer + 'static,
    S: TranslationEngine + 'static,
    L: TranslationEngine + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler::<R, S, L>))
        .route("/api/v1/translate", post(translate_handler::<R, S, L>))
        .route("/api/v1/transcribe", post(transcribe_handler::<R, S, L>))
        .route(
            "/api/v1/speech-to-text",
            post(transcribe_handler::<R, S, L>),
        )
        .layer(DefaultBodyLimit::max(MAX_AUDIO_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
