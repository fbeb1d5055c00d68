use crate::domain::{Complexity, Language};

/// Token count at or below which a phrase is considered trivial, provided no
/// domain vocabulary is present.
const MAX_SIMPLE_TOKENS: usize = 3;

const GREETINGS_EN: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "thanks",
    "thank you",
    "thank you very much",
    "good morning",
    "good afternoon",
    "good evening",
    "good night",
    "ok",
    "okay",
    "yes",
    "no",
    "bye",
    "goodbye",
    "please",
    "welcome",
    "namaste",
];

const GREETINGS_HI: &[&str] = &[
    "नमस्ते",
    "नमस्कार",
    "धन्यवाद",
    "बहुत धन्यवाद",
    "शुक्रिया",
    "हाँ",
    "नहीं",
    "ठीक है",
    "अलविदा",
    "सुप्रभात",
    "शुभ रात्रि",
    "स्वागत है",
];

const GREETINGS_TE: &[&str] = &[
    "నమస్తే",
    "నమస్కారం",
    "ధన్యవాదాలు",
    "చాలా ధన్యవాదాలు",
    "సరే",
    "అవును",
    "కాదు",
    "వీడ్కోలు",
    "శుభోదయం",
    "శుభ సాయంత్రం",
    "శుభరాత్రి",
];

// Domain-indicative vocabulary, matched as substrings so inflected forms
// (e.g. Telugu case suffixes) still hit.
const DOMAIN_TERMS_EN: &[&str] = &[
    "crop",
    "pest",
    "fertilizer",
    "fertiliser",
    "pesticide",
    "insecticide",
    "fungicide",
    "soil",
    "seed",
    "sowing",
    "irrigation",
    "harvest",
    "yield",
    "disease",
    "fungus",
    "subsidy",
    "scheme",
    "urea",
    "paddy",
    "wheat",
    "cotton",
    "maize",
    "monsoon",
];

const DOMAIN_TERMS_HI: &[&str] = &[
    "फसल",
    "कीट",
    "खाद",
    "उर्वरक",
    "कीटनाशक",
    "मिट्टी",
    "बीज",
    "बुवाई",
    "सिंचाई",
    "कटाई",
    "उपज",
    "रोग",
    "योजना",
    "यूरिया",
    "धान",
    "गेहूं",
    "कपास",
    "मानसून",
];

const DOMAIN_TERMS_TE: &[&str] = &[
    "పంట",
    "పురుగు",
    "ఎరువు",
    "ఎరుపు",
    "క్రిమిసంహారక",
    "నేల",
    "విత్తన",
    "నీటిపారుదల",
    "కోత",
    "దిగుబడి",
    "తెగులు",
    "వ్యాధి",
    "పథకం",
    "యూరియా",
    "వరి",
    "గోధుమ",
    "పత్తి",
];

/// Decides whether an utterance is a trivial phrase or a substantive query.
/// Pure heuristics over curated per-language tables: no network, no model
/// call, deterministic for a given input. The tables are fixed at build time
/// and immutable for the process lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityClassifier;

impl ComplexityClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify `text` in `language`. Empty or whitespace-only text is a
    /// request-validation failure, rejected before any provider is involved.
    pub fn classify(
        &self,
        text: &str,
        language: Language,
    ) -> Result<Complexity, ClassifierInputError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ClassifierInputError::EmptyText);
        }

        let lowered = trimmed.to_lowercase();

        // Domain vocabulary wins over brevity: a three-word fertilizer
        // question still needs the contextual engine.
        if domain_terms(language)
            .iter()
            .any(|term| lowered.contains(term))
        {
            return Ok(Complexity::Contextual);
        }

        if lowered.split_whitespace().count() <= MAX_SIMPLE_TOKENS {
            return Ok(Complexity::Simple);
        }

        let normalized = lowered.trim_matches(|c: char| c.is_ascii_punctuation() || c == '।');
        if greetings(language).iter().any(|g| *g == normalized) {
            return Ok(Complexity::Simple);
        }

        Ok(Complexity::Contextual)
    }
}

fn greetings(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => GREETINGS_EN,
        Language::Hindi => GREETINGS_HI,
        Language::Telugu => GREETINGS_TE,
    }
}

fn domain_terms(language: Language) -> &'static [&'static str] {
    match language {
        Language::English => DOMAIN_TERMS_EN,
        Language::Hindi => DOMAIN_TERMS_HI,
        Language::Telugu => DOMAIN_TERMS_TE,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierInputError {
    #[error("utterance text is empty or whitespace-only")]
    EmptyText,
}
