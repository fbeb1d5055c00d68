mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ProviderSettings, RoutingSettings, ServerSettings, Settings};
