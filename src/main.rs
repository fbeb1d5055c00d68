use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use vaani::application::services::{BridgeService, ComplexityClassifier, RoutingService};
use vaani::infrastructure::observability::{init_tracing, TracingConfig};
use vaani::infrastructure::speech::GoogleSpeechRecognizer;
use vaani::infrastructure::translation::{GeminiEngine, GoogleTranslateEngine};
use vaani::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();
    init_tracing(TracingConfig::default(), settings.server.port);

    if !settings.llm_configured() {
        tracing::warn!("No Gemini API key configured; llm engine calls will fail and fall back");
    }

    let standard = Arc::new(GoogleTranslateEngine::new(None));
    let llm = Arc::new(GeminiEngine::new(
        settings.providers.gemini_api_key.clone(),
        None,
        Some(settings.providers.gemini_model.clone()),
    ));
    let recognizer = Arc::new(GoogleSpeechRecognizer::new(
        settings.providers.speech_api_key.clone(),
        None,
    ));

    let routing_service = Arc::new(RoutingService::new(
        Arc::clone(&standard),
        Arc::clone(&llm),
        ComplexityClassifier::new(),
        settings.routing.llm_deadline,
    ));
    let bridge_service = Arc::new(BridgeService::new(
        Arc::clone(&recognizer),
        Arc::clone(&routing_service),
    ));

    let state = AppState {
        routing_service,
        bridge_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
