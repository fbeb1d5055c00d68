use super::{Language, RoutingOverride};

/// A single translation request. Constructed per call and passed by value
/// into the routing engine; never shared across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: Language,
    pub target: Language,
    pub mode: RoutingOverride,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source: Language,
        target: Language,
        mode: RoutingOverride,
    ) -> Self {
        Self {
            text: text.into(),
            source,
            target,
            mode,
        }
    }
}

/// The engine whose output was actually returned, after any fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineChoice {
    Standard,
    Llm,
}

/// Final outcome of a routed translation. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub text: String,
    pub engine: EngineChoice,
}

impl TranslationResult {
    pub fn llm_used(&self) -> bool {
        matches!(self.engine, EngineChoice::Llm)
    }
}
