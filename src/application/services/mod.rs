mod bridge_service;
mod complexity_classifier;
mod routing_service;

pub use bridge_service::{BridgeError, BridgeOutcome, BridgeService};
pub use complexity_classifier::{ClassifierInputError, ComplexityClassifier};
pub use routing_service::{AttemptError, RoutingError, RoutingService, DEFAULT_LLM_DEADLINE};
