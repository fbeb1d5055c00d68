use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use vaani::application::ports::{EngineError, TranslationEngine};
use vaani::application::services::{
    ComplexityClassifier, RoutingError, RoutingService, DEFAULT_LLM_DEADLINE,
};
use vaani::domain::{Language, RoutingOverride, TranslationRequest};

struct FixedEngine {
    reply: &'static str,
    calls: AtomicUsize,
}

impl FixedEngine {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationEngine for FixedEngine {
    async fn translate(
        &self,
        _text: &str,
        _source: Language,
        _target: Language,
    ) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.to_string())
    }
}

struct FailingEngine {
    calls: AtomicUsize,
}

impl FailingEngine {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationEngine for FailingEngine {
    async fn translate(
        &self,
        _text: &str,
        _source: Language,
        _target: Language,
    ) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EngineError::ApiRequestFailed(
            "connection refused".to_string(),
        ))
    }
}

struct SlowEngine {
    delay: Duration,
    reply: &'static str,
    calls: AtomicUsize,
}

impl SlowEngine {
    fn new(delay: Duration, reply: &'static str) -> Self {
        Self {
            delay,
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationEngine for SlowEngine {
    async fn translate(
        &self,
        _text: &str,
        _source: Language,
        _target: Language,
    ) -> Result<String, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(self.reply.to_string())
    }
}

fn routing<S, L>(standard: Arc<S>, llm: Arc<L>) -> RoutingService<S, L>
where
    S: TranslationEngine,
    L: TranslationEngine,
{
    RoutingService::new(
        standard,
        llm,
        ComplexityClassifier::new(),
        DEFAULT_LLM_DEADLINE,
    )
}

fn request(text: &str, mode: RoutingOverride) -> TranslationRequest {
    TranslationRequest::new(text, Language::English, Language::Telugu, mode)
}

#[tokio::test]
async fn given_force_standard_when_routing_then_llm_never_invoked() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request(
            "how do I treat leaf curl on my cotton crop",
            RoutingOverride::ForceStandard,
        ))
        .await
        .unwrap();

    assert_eq!(result.text, "standard output");
    assert!(!result.llm_used());
    assert_eq!(standard.call_count(), 1);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_force_standard_and_engine_failure_then_error_surfaced_without_fallback() {
    let standard = Arc::new(FailingEngine::new());
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request("hello there", RoutingOverride::ForceStandard))
        .await;

    assert!(matches!(result, Err(RoutingError::StandardFailed(_))));
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn given_force_llm_when_call_exceeds_deadline_then_standard_output_returned() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(SlowEngine::new(Duration::from_secs(11), "too late"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request("which pesticide for stem borer", RoutingOverride::ForceLlm))
        .await
        .unwrap();

    assert_eq!(result.text, "standard output");
    assert!(!result.llm_used());
    assert_eq!(llm.call_count(), 1);
    assert_eq!(standard.call_count(), 1);
}

#[tokio::test]
async fn given_force_llm_and_engine_failure_then_standard_fallback_returned() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(FailingEngine::new());
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request("hello", RoutingOverride::ForceLlm))
        .await
        .unwrap();

    assert_eq!(result.text, "standard output");
    assert!(!result.llm_used());
}

#[tokio::test]
async fn given_autonomous_simple_text_then_standard_attempted_and_llm_skipped() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request("thank you", RoutingOverride::Autonomous))
        .await
        .unwrap();

    assert!(!result.llm_used());
    assert_eq!(standard.call_count(), 1);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_autonomous_simple_text_and_standard_failure_then_llm_fallback() {
    let standard = Arc::new(FailingEngine::new());
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request("thank you", RoutingOverride::Autonomous))
        .await
        .unwrap();

    assert_eq!(result.text, "llm output");
    assert!(result.llm_used());
    assert_eq!(standard.call_count(), 1);
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn given_autonomous_contextual_text_then_llm_attempted_first() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request(
            "what fertilizer schedule suits paddy in heavy monsoon",
            RoutingOverride::Autonomous,
        ))
        .await
        .unwrap();

    assert_eq!(result.text, "llm output");
    assert!(result.llm_used());
    assert_eq!(standard.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn given_autonomous_contextual_and_llm_timeout_then_standard_fallback() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(SlowEngine::new(Duration::from_secs(30), "too late"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request(
            "what fertilizer schedule suits paddy in heavy monsoon",
            RoutingOverride::Autonomous,
        ))
        .await
        .unwrap();

    assert_eq!(result.text, "standard output");
    assert!(!result.llm_used());
}

#[tokio::test]
async fn given_both_engines_failing_then_exhausted_error() {
    let standard = Arc::new(FailingEngine::new());
    let llm = Arc::new(FailingEngine::new());
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(request(
            "what fertilizer schedule suits paddy in heavy monsoon",
            RoutingOverride::Autonomous,
        ))
        .await;

    assert!(matches!(result, Err(RoutingError::Exhausted { .. })));
    assert_eq!(standard.call_count(), 1);
    assert_eq!(llm.call_count(), 1);
}

#[tokio::test]
async fn given_empty_text_then_invalid_input_without_engine_calls() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service.route(request("   ", RoutingOverride::ForceLlm)).await;

    assert!(matches!(result, Err(RoutingError::InvalidInput(_))));
    assert_eq!(standard.call_count(), 0);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_same_source_and_target_then_passthrough_without_engine_calls() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(TranslationRequest::new(
            "hello",
            Language::English,
            Language::English,
            RoutingOverride::Autonomous,
        ))
        .await
        .unwrap();

    assert_eq!(result.text, "hello");
    assert!(!result.llm_used());
    assert_eq!(standard.call_count(), 0);
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_deterministic_standard_engine_then_repeated_requests_are_idempotent() {
    let standard = Arc::new(FixedEngine::new("నమస్తే"));
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let first = service
        .route(request("hello", RoutingOverride::ForceStandard))
        .await
        .unwrap();
    let second = service
        .route(request("hello", RoutingOverride::ForceStandard))
        .await
        .unwrap();

    assert_eq!(first.text, second.text);
    assert_eq!(first.llm_used(), second.llm_used());
}

#[tokio::test]
async fn given_telugu_thanks_autonomous_then_standard_engine_bridges_it() {
    let standard = Arc::new(FixedEngine::new("Thank you"));
    let llm = Arc::new(FixedEngine::new("llm output"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(TranslationRequest::new(
            "ధన్యవాదాలు",
            Language::Telugu,
            Language::English,
            RoutingOverride::Autonomous,
        ))
        .await
        .unwrap();

    assert_eq!(result.text, "Thank you");
    assert!(!result.llm_used());
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn given_telugu_fertilizer_question_autonomous_then_llm_engine_answers() {
    let standard = Arc::new(FixedEngine::new("standard output"));
    let llm = Arc::new(FixedEngine::new("Which fertilizer should I apply to my crops?"));
    let service = routing(Arc::clone(&standard), Arc::clone(&llm));

    let result = service
        .route(TranslationRequest::new(
            "పంటలకు ఏ ఎరుపువేయ్యాలి?",
            Language::Telugu,
            Language::English,
            RoutingOverride::Autonomous,
        ))
        .await
        .unwrap();

    assert!(result.llm_used());
    assert_eq!(result.text, "Which fertilizer should I apply to my crops?");
    assert_eq!(standard.call_count(), 0);
}
