//! # Provider Configuration
//!
//! Connection settings for the text generation backend.
//!
//! | Type | Aliases | API Key Required |
//! |------|---------|-----------------|
//! | `gemini` | `google`, `google-ai` | Yes |
//! | `ollama` | `localai` | No |

use crate::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_OLLAMA_ENDPOINT, DEFAULT_OLLAMA_MODEL, DEFAULT_PROVIDER_ID,
};
use serde::Deserialize;

/// Configuration for the generation provider.
///
/// # Example
///
/// ```toml
/// [provider]
/// id = "gemini"
/// type = "gemini"
/// endpoint = "https://generativelanguage.googleapis.com"
/// api_key = "GOOGLE_API_KEY"
/// model = "gemini-pro"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Identifier used in logs and errors
    pub id: String,
    /// Selects the wire format: "gemini" or "ollama"
    pub provider_type: String,
    /// API endpoint URL
    pub endpoint: String,
    /// Name of the environment variable holding the API key
    pub api_key: Option<String>,
    /// Custom API path override (e.g., "v1beta/models" for Gemini)
    pub api_path: Option<String>,
    /// Model name sent with every request
    pub model: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_PROVIDER_ID.to_string(),
            provider_type: "gemini".to_string(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_key: Some(DEFAULT_API_KEY_ENV.to_string()),
            api_path: Some(DEFAULT_GEMINI_API_PATH.to_string()),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub(super) struct RawProviderConfig {
    pub(super) id: Option<String>,
    #[serde(rename = "type")]
    pub(super) provider_type: Option<String>,
    pub(super) endpoint: Option<String>,
    pub(super) api_key: Option<String>,
    pub(super) api_path: Option<String>,
    pub(super) model: Option<String>,
}

impl From<RawProviderConfig> for ProviderConfig {
    fn from(raw: RawProviderConfig) -> Self {
        let provider_type = raw
            .provider_type
            .unwrap_or_else(|| ProviderConfig::default().provider_type);
        let defaults = ProviderConfig::defaults_for(&provider_type);

        Self {
            id: raw.id.unwrap_or_else(|| provider_type.to_ascii_lowercase()),
            endpoint: raw.endpoint.unwrap_or(defaults.endpoint),
            api_key: raw.api_key.or(defaults.api_key),
            api_path: raw.api_path.or(defaults.api_path),
            model: raw.model.unwrap_or(defaults.model),
            provider_type,
        }
    }
}

fn is_gemini_type(provider_type: &str) -> bool {
    matches!(
        provider_type.to_ascii_lowercase().as_str(),
        "gemini" | "google" | "google-ai"
    )
}

fn is_ollama_type(provider_type: &str) -> bool {
    matches!(
        provider_type.to_ascii_lowercase().as_str(),
        "ollama" | "localai"
    )
}

impl ProviderConfig {
    /// Built-in settings for a provider type. Ollama types point at a local
    /// server and carry no key; anything else gets the Gemini settings.
    pub fn defaults_for(provider_type: &str) -> Self {
        if is_ollama_type(provider_type) {
            Self {
                id: provider_type.to_ascii_lowercase(),
                provider_type: provider_type.to_string(),
                endpoint: DEFAULT_OLLAMA_ENDPOINT.to_string(),
                api_key: None,
                api_path: None,
                model: DEFAULT_OLLAMA_MODEL.to_string(),
            }
        } else {
            Self {
                id: provider_type.to_ascii_lowercase(),
                provider_type: provider_type.to_string(),
                ..Self::default()
            }
        }
    }

    /// Check if this is a Gemini provider (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use mentor_core::config::ProviderConfig;
    ///
    /// let provider = ProviderConfig {
    ///     provider_type: "GOOGLE".to_string(),
    ///     ..ProviderConfig::default()
    /// };
    /// assert!(provider.is_gemini());
    /// assert!(!provider.is_ollama());
    /// ```
    pub fn is_gemini(&self) -> bool {
        is_gemini_type(&self.provider_type)
    }

    /// Check if this is an Ollama provider (case-insensitive).
    pub fn is_ollama(&self) -> bool {
        is_ollama_type(&self.provider_type)
    }
}
