use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{EngineError, TranslationEngine};
use crate::application::services::{ClassifierInputError, ComplexityClassifier};
use crate::domain::{
    Complexity, EngineChoice, RoutingOverride, TranslationRequest, TranslationResult,
};

/// Bound on a single LLM engine call. The standard engine is sub-second and
/// runs without a deadline.
pub const DEFAULT_LLM_DEADLINE: Duration = Duration::from_secs(10);

/// The autonomous routing engine: picks between the deterministic standard
/// engine and the context-aware LLM engine, enforces the LLM deadline, and
/// falls back so a response is produced whenever any path remains.
///
/// Stateless per call; holds only immutable adapter handles and the deadline,
/// so one instance serves any number of in-flight requests.
pub struct RoutingService<S, L>
where
    S: TranslationEngine,
    L: TranslationEngine,
{
    standard: Arc<S>,
    llm: Arc<L>,
    classifier: ComplexityClassifier,
    llm_deadline: Duration,
}

impl<S, L> RoutingService<S, L>
where
    S: TranslationEngine,
    L: TranslationEngine,
{
    pub fn new(
        standard: Arc<S>,
        llm: Arc<L>,
        classifier: ComplexityClassifier,
        llm_deadline: Duration,
    ) -> Self {
        Self {
            standard,
            llm,
            classifier,
            llm_deadline,
        }
    }

    /// Route one request to an engine and reconcile the outcome.
    ///
    /// Decision order:
    /// 1. force-standard: standard only; a failure is final, since an
    ///    explicit override expresses intent that must not be overridden.
    /// 2. force-llm: LLM under the deadline, standard as fallback.
    /// 3. autonomous: classify, then simple -> standard first with LLM
    ///    fallback, contextual -> LLM first with standard fallback.
    ///
    /// A timed-out LLM call is never retried; its future is dropped and the
    /// fallback proceeds immediately.
    pub async fn route(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, RoutingError> {
        if request.text.trim().is_empty() {
            return Err(RoutingError::InvalidInput(ClassifierInputError::EmptyText));
        }

        // Identical language pair is a pass-through; no engine is consulted.
        if request.source == request.target {
            return Ok(TranslationResult {
                text: request.text,
                engine: EngineChoice::Standard,
            });
        }

        match request.mode {
            RoutingOverride::ForceStandard => {
                let text = self
                    .standard
                    .translate(&request.text, request.source, request.target)
                    .await
                    .map_err(|e| {
                        tracing::error!(
                            error = %e,
                            source = %request.source,
                            target = %request.target,
                            "standard engine failed with no fallback path"
                        );
                        RoutingError::StandardFailed(e)
                    })?;
                Ok(TranslationResult {
                    text,
                    engine: EngineChoice::Standard,
                })
            }
            RoutingOverride::ForceLlm => self.llm_then_standard(&request).await,
            RoutingOverride::Autonomous => {
                let complexity = self.classifier.classify(&request.text, request.source)?;
                tracing::debug!(complexity = %complexity, "classified utterance");
                match complexity {
                    Complexity::Simple => self.standard_then_llm(&request).await,
                    Complexity::Contextual => self.llm_then_standard(&request).await,
                }
            }
        }
    }

    /// One LLM attempt under the deadline. `tokio::time::timeout` polls the
    /// inner future before the timer, so a call whose result is ready at the
    /// deadline instant is still accepted; anything later loses the race and
    /// the abandoned future is dropped, never polled again.
    async fn attempt_llm(&self, request: &TranslationRequest) -> Result<String, AttemptError> {
        let call = self
            .llm
            .translate(&request.text, request.source, request.target);
        match tokio::time::timeout(self.llm_deadline, call).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(AttemptError::Engine(e)),
            Err(_) => Err(AttemptError::DeadlineExceeded(self.llm_deadline)),
        }
    }

    async fn llm_then_standard(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, RoutingError> {
        match self.attempt_llm(request).await {
            Ok(text) => Ok(TranslationResult {
                text,
                engine: EngineChoice::Llm,
            }),
            Err(primary) => {
                tracing::warn!(
                    error = %primary,
                    source = %request.source,
                    target = %request.target,
                    "llm engine failed, falling back to standard"
                );
                match self
                    .standard
                    .translate(&request.text, request.source, request.target)
                    .await
                {
                    Ok(text) => Ok(TranslationResult {
                        text,
                        engine: EngineChoice::Standard,
                    }),
                    Err(fallback) => {
                        tracing::error!(
                            primary = %primary,
                            fallback = %fallback,
                            "both engines failed, translation unavailable"
                        );
                        Err(RoutingError::Exhausted {
                            primary,
                            fallback: AttemptError::Engine(fallback),
                        })
                    }
                }
            }
        }
    }

    async fn standard_then_llm(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, RoutingError> {
        match self
            .standard
            .translate(&request.text, request.source, request.target)
            .await
        {
            Ok(text) => Ok(TranslationResult {
                text,
                engine: EngineChoice::Standard,
            }),
            Err(primary) => {
                tracing::warn!(
                    error = %primary,
                    source = %request.source,
                    target = %request.target,
                    "standard engine failed, falling back to llm"
                );
                match self.attempt_llm(request).await {
                    Ok(text) => Ok(TranslationResult {
                        text,
                        engine: EngineChoice::Llm,
                    }),
                    Err(fallback) => {
                        tracing::error!(
                            primary = %primary,
                            fallback = %fallback,
                            "both engines failed, translation unavailable"
                        );
                        Err(RoutingError::Exhausted {
                            primary: AttemptError::Engine(primary),
                            fallback,
                        })
                    }
                }
            }
        }
    }
}

/// Outcome of a single engine attempt, kept distinct from [`EngineError`] so
/// the deadline expiry remains visible in logs even though callers only see
/// the final result.
#[derive(Debug, thiserror::Error)]
pub enum AttemptError {
    #[error("{0}")]
    Engine(#[from] EngineError),
    #[error("deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),
}

#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ClassifierInputError),
    #[error("standard engine failed: {0}")]
    StandardFailed(EngineError),
    #[error("translation unavailable: primary attempt failed ({primary}), fallback attempt failed ({fallback})")]
    Exhausted {
        primary: AttemptError,
        fallback: AttemptError,
    },
}
