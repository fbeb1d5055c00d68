mod complexity;
mod language;
mod routing_override;
mod translation;
mod utterance;

pub use complexity::Complexity;
pub use language::Language;
pub use routing_override::RoutingOverride;
pub use translation::{EngineChoice, TranslationRequest, TranslationResult};
pub use utterance::Utterance;
