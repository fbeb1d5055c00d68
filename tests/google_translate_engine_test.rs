use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use vaani::application::ports::{EngineError, TranslationEngine};
use vaani::domain::Language;
use vaani::infrastructure::translation::GoogleTranslateEngine;

async fn start_mock_translate_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/translate_a/single",
        get(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, [("content-type", "application/json")], response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_valid_text_when_standard_engine_translates_then_joins_segments() {
    let response_body = r#"[[["నమస్తే. ","Hello. ",null,null,10],["మీరు ఎలా ఉన్నారు?","How are you?",null,null,10]],null,"en"]"#;
    let (base_url, shutdown_tx) = start_mock_translate_server(200, response_body).await;

    let engine = GoogleTranslateEngine::new(Some(base_url));
    let result = engine
        .translate("Hello. How are you?", Language::English, Language::Telugu)
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), "నమస్తే. మీరు ఎలా ఉన్నారు?");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_returns_error_status_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_translate_server(503, "upstream unavailable").await;

    let engine = GoogleTranslateEngine::new(Some(base_url));
    let result = engine
        .translate("hello", Language::English, Language::Hindi)
        .await;

    assert!(matches!(result, Err(EngineError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_returns_quota_status_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_translate_server(429, "slow down").await;

    let engine = GoogleTranslateEngine::new(Some(base_url));
    let result = engine
        .translate("hello", Language::English, Language::Hindi)
        .await;

    assert!(matches!(result, Err(EngineError::RateLimited)));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_returns_unexpected_shape_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_translate_server(200, r#"{"detail": "nope"}"#).await;

    let engine = GoogleTranslateEngine::new(Some(base_url));
    let result = engine
        .translate("hello", Language::English, Language::Hindi)
        .await;

    assert!(matches!(result, Err(EngineError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}
