use std::time::Duration;

use super::Environment;

/// Runtime settings, loaded once from the environment at process start and
/// immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub providers: ProviderSettings,
    pub routing: RoutingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub speech_api_key: String,
}

#[derive(Debug, Clone)]
pub struct RoutingSettings {
    pub llm_deadline: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        // Either key name populates the LLM engine; deployments have used both.
        let gemini_api_key = non_empty_var("GOOGLE_API_KEY")
            .or_else(|| non_empty_var("GEMINI_API_KEY"))
            .unwrap_or_default();

        Self {
            environment: std::env::var("APP_ENV")
                .ok()
                .and_then(|v| Environment::try_from(v).ok())
                .unwrap_or(Environment::Local),
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8001),
            },
            providers: ProviderSettings {
                gemini_api_key,
                gemini_model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
                speech_api_key: std::env::var("SPEECH_API_KEY").unwrap_or_default(),
            },
            routing: RoutingSettings {
                llm_deadline: Duration::from_secs(
                    std::env::var("LLM_TIMEOUT_SECS")
                        .ok()
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(10),
                ),
            },
        }
    }

    pub fn llm_configured(&self) -> bool {
        !self.providers.gemini_api_key.is_empty()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
