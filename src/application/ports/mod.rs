mod speech_recognizer;
mod translation_engine;

pub use speech_recognizer::{SpeechRecognizer, TranscriptionError};
pub use translation_engine::{EngineError, TranslationEngine};
