use std::sync::Arc;

use crate::application::ports::{SpeechRecognizer, TranslationEngine};
use crate::application::services::{BridgeService, RoutingService};
use crate::presentation::config::Settings;

pub struct AppState<R, S, L>
where
    R: SpeechRecognizer,
    S: TranslationEngine,
    L: TranslationEngine,
{
    pub routing_service: Arc<RoutingService<S, L>>,
    pub bridge_service: Arc<BridgeService<R, S, L>>,
    pub settings: Settings,
}

impl<R, S, L> Clone for AppState<R, S, L>
where
    R: SpeechRecognizer,
    S: TranslationEngine,
    L: TranslationEngine,
{
    fn clone(&self) -> Self {
        Self {
            routing_service: Arc::clone(&self.routing_service),
            bridge_service: Arc::clone(&self.bridge_service),
            settings: self.settings.clone(),
        }
    }
}
