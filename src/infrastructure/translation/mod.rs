mod gemini_engine;
mod google_translate_engine;

pub use gemini_engine::GeminiEngine;
pub use google_translate_engine::GoogleTranslateEngine;
