//! Anthropic provider implementation

use crate::error::{NameForgeError, Result};
use crate::llm::LlmProvider;
use crate::types::{LlmConfig, ProviderKind};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{build_client, error_for_status, send_error, REQUEST_TIMEOUT_SECS, SYSTEM_PROMPT};

const API_VERSION: &str = "2023-06-01";

/// Anthropic messages-API provider
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl AnthropicProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(NameForgeError::config("Anthropic API key is required"));
        }

        Ok(Self {
            client: build_client(REQUEST_TIMEOUT_SECS)?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.anthropic.com/v1".to_string()),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = MessagesRequest {
            model: &self.model,
            system: SYSTEM_PROMPT,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: 2000,
        };

        let url = format!("{}/messages", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(ProviderKind::Anthropic, e, &url, REQUEST_TIMEOUT_SECS))?;

        if !response.status().is_success() {
            return Err(error_for_status(ProviderKind::Anthropic, response, &url).await);
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| NameForgeError::parse(e.to_string(), None))?;

        let text: String = body.content.into_iter().filter_map(|block| block.text).collect();
        if text.is_empty() {
            return Err(NameForgeError::provider(ProviderKind::Anthropic, "Empty message content"));
        }
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    system: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

/// Non-text blocks carry no `text` field
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}
