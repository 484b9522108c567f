//! Provider factory - creates clients from config

use super::clients::{GeminiClient, OllamaClient};
use super::traits::TextGenerator;
use crate::config::ProviderConfig;
use std::env;
use std::sync::Arc;
use tracing::warn;

/// Resolve API key from environment variable
pub fn resolve_api_key(provider: &str, env_var: Option<&str>) -> Option<String> {
    let Some(raw) = env_var.map(str::trim) else {
        return None;
    };
    if raw.is_empty() {
        return None;
    }
    match env::var(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                provider,
                env_var = raw,
                %err,
                "API key environment variable is not set"
            );
            None
        }
    }
}

/// Factory for creating generation clients from provider config.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Creates a generator based on provider type.
    ///
    /// Supported types:
    /// - `ollama`, `localai` → Ollama format
    /// - `gemini`, `google`, `google-ai` → Gemini format (also the fallback)
    pub fn create(config: &ProviderConfig) -> Arc<dyn TextGenerator> {
        if config.is_ollama() {
            Arc::new(OllamaClient::from_config(config))
        } else {
            Arc::new(GeminiClient::from_config(config))
        }
    }
}
