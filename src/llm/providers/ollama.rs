//! Ollama provider implementation
//!
//! Talks to a local Ollama server; no API key needed

use crate::error::{NameForgeError, Result};
use crate::llm::LlmProvider;
use crate::types::{LlmConfig, ProviderKind};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{build_client, error_for_status, send_error, LOCAL_TIMEOUT_SECS, SYSTEM_PROMPT};

/// Ollama `/api/generate` provider
pub struct OllamaProvider {
    client: Client,
    model: String,
    base_url: String,
    temperature: f32,
    timeout_secs: u64,
}

impl OllamaProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Self::with_timeout(config, LOCAL_TIMEOUT_SECS)
    }

    /// Provider with a custom client timeout in seconds
    pub fn with_timeout(config: &LlmConfig, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout_secs)?,
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "http://localhost:11434".to_string()),
            temperature: config.temperature,
            timeout_secs,
        })
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.model,
            system: SYSTEM_PROMPT,
            prompt,
            format: "json",
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(ProviderKind::Ollama, e, &url, self.timeout_secs))?;

        if response.status().as_u16() == 404 {
            return Err(NameForgeError::provider(
                ProviderKind::Ollama,
                format!("Model '{}' not found. Pull it first: ollama pull {}", self.model, self.model),
            ));
        }
        if !response.status().is_success() {
            return Err(error_for_status(ProviderKind::Ollama, response, &url).await);
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| NameForgeError::parse(e.to_string(), None))?;

        Ok(body.response)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        !self.model.is_empty()
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    format: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}
