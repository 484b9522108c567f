//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::join_url;
use crate::config::ProviderConfig;
use crate::constants::DEFAULT_GEMINI_API_PATH;
use crate::infrastructure::model::factory::resolve_api_key;
use crate::infrastructure::model::traits::TextGenerator;
use crate::infrastructure::model::types::GenerationError;

/// Gemini client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    id: String,
    endpoint: String,
    api_key: Option<String>,
    api_path: String,
    model: String,
    http: Client,
}

impl GeminiClient {
    pub fn from_config(config: &ProviderConfig) -> Self {
        let api_key = resolve_api_key(&config.id, config.api_key.as_deref());
        Self::new(config, api_key)
    }

    /// Build a client with an already-resolved API key
    pub fn new(config: &ProviderConfig, api_key: Option<String>) -> Self {
        Self {
            id: config.id.clone(),
            endpoint: config.endpoint.clone(),
            api_key,
            api_path: config
                .api_path
                .clone()
                .unwrap_or_else(|| DEFAULT_GEMINI_API_PATH.to_string()),
            model: config.model.clone(),
            http: Client::new(),
        }
    }

    fn build_model_url(&self) -> String {
        let path = format!(
            "{}/{}:generateContent",
            self.api_path.trim_matches('/'),
            self.model
        );
        join_url(&self.endpoint, &path)
    }

    fn require_api_key(&self) -> Result<&str, GenerationError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GenerationError::missing_api_key(&self.id))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self.require_api_key()?;
        let url = self.build_model_url();
        let payload = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }]
        });

        info!(
            provider = self.id.as_str(),
            model = self.model.as_str(),
            prompt_chars = prompt.chars().count(),
            "Sending request to Gemini"
        );

        let network = |e: reqwest::Error| GenerationError::network(&self.id, e);
        let response: GeminiResponse = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&payload)
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?
            .json()
            .await
            .map_err(network)?;
        debug!("Received response from Gemini");

        if let Some(reason) = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
        {
            return Err(GenerationError::invalid_response(
                &self.id,
                format!("prompt blocked: {reason}"),
            ));
        }

        let parts: Vec<String> = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if parts.is_empty() {
            return Err(GenerationError::empty_response(&self.id));
        }

        Ok(parts.concat())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    prompt_feedback: Option<GeminiPromptFeedback>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}
