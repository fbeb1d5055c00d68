use super::Language;

/// An immutable spoken or written input in one of the supported languages.
/// The `chat_id` is an opaque correlation token carried through for logging
/// only; the engine never mutates or interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    text: String,
    language: Language,
    chat_id: Option<String>,
}

impl Utterance {
    pub fn new(text: String, language: Language, chat_id: Option<String>) -> Self {
        Self {
            text,
            language,
            chat_id,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
