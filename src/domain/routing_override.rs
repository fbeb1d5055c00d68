use std::fmt;

/// Caller-supplied instruction to force a specific engine or defer to
/// autonomous selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingOverride {
    ForceLlm,
    ForceStandard,
    #[default]
    Autonomous,
}

impl RoutingOverride {
    /// Wire form of the override: `use_llm = true | false | absent`.
    pub fn from_use_llm(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => RoutingOverride::ForceLlm,
            Some(false) => RoutingOverride::ForceStandard,
            None => RoutingOverride::Autonomous,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingOverride::ForceLlm => "force-llm",
            RoutingOverride::ForceStandard => "force-standard",
            RoutingOverride::Autonomous => "autonomous",
        }
    }
}

impl fmt::Display for RoutingOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
