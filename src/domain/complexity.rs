use std::fmt;

/// Classifier verdict for an utterance. `Simple` inputs are trivial phrases
/// the deterministic engine translates well; `Contextual` inputs need the
/// domain-aware engine for accuracy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Simple,
    Contextual,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Contextual => "contextual",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
