//! OpenAI provider implementation
//!
//! Supports OpenAI API and OpenAI-compatible APIs (OpenRouter, OneAPI, etc.)

use crate::error::{NameForgeError, Result};
use crate::llm::LlmProvider;
use crate::types::{LlmConfig, ProviderKind};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{build_client, error_for_status, send_error, REQUEST_TIMEOUT_SECS, SYSTEM_PROMPT};

/// OpenAI chat-completions provider
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl OpenAiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(NameForgeError::config("OpenAI API key is required"));
        }

        Ok(Self {
            client: build_client(REQUEST_TIMEOUT_SECS)?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            temperature: config.temperature,
        })
    }

    /// Accept base URLs with or without the `/v1` segment
    fn build_url(&self, endpoint: &str) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        if base_url.ends_with("/v1") {
            format!("{}{}", base_url, endpoint)
        } else {
            format!("{}/v1{}", base_url, endpoint)
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: 2000,
        };

        let url = self.build_url("/chat/completions");
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(ProviderKind::OpenAi, e, &url, REQUEST_TIMEOUT_SECS))?;

        if !response.status().is_success() {
            return Err(error_for_status(ProviderKind::OpenAi, response, &url).await);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| NameForgeError::parse(e.to_string(), None))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| NameForgeError::provider(ProviderKind::OpenAi, "Empty completion"))
    }

    fn name(&self) -> &'static str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: Option<&str>) -> LlmConfig {
        LlmConfig {
            api_key: "sk-test".to_string(),
            base_url: base_url.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_api_key() {
        let result = OpenAiProvider::new(&LlmConfig::default());
        assert!(matches!(result, Err(NameForgeError::Config { .. })));
    }

    #[test]
    fn test_build_url_adds_version_segment_once() {
        let provider = OpenAiProvider::new(&config(Some("https://openrouter.ai/api/"))).unwrap();
        assert_eq!(
            provider.build_url("/chat/completions"),
            "https://openrouter.ai/api/v1/chat/completions"
        );

        let provider = OpenAiProvider::new(&config(None)).unwrap();
        assert_eq!(
            provider.build_url("/chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
