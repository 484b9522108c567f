//! Ollama client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::join_url;
use crate::config::ProviderConfig;
use crate::infrastructure::model::traits::TextGenerator;
use crate::infrastructure::model::types::GenerationError;

/// Ollama client for local LLM
#[derive(Clone)]
pub struct OllamaClient {
    id: String,
    endpoint: String,
    model: String,
    http: Client,
}

impl OllamaClient {
    /// Creates client from provider config.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            id: config.id.clone(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl TextGenerator for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = join_url(&self.endpoint, "/api/generate");

        let payload = OllamaRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        info!(
            provider = self.id.as_str(),
            model = self.model.as_str(),
            "Sending request to Ollama"
        );

        let network = |e: reqwest::Error| GenerationError::network(&self.id, e);
        let response: OllamaResponse = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(network)?
            .error_for_status()
            .map_err(network)?
            .json()
            .await
            .map_err(network)?;
        debug!("Received response from Ollama");

        response
            .response
            .filter(|text| !text.is_empty())
            .ok_or_else(|| GenerationError::empty_response(&self.id))
    }
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: Option<String>,
}
