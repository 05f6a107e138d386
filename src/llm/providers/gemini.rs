//! Google Gemini provider implementation

use crate::error::{NameForgeError, Result};
use crate::llm::LlmProvider;
use crate::types::{LlmConfig, ProviderKind};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{build_client, error_for_status, send_error, REQUEST_TIMEOUT_SECS, SYSTEM_PROMPT};

/// Gemini `generateContent` provider
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

impl GeminiProvider {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(NameForgeError::config("Gemini API key is required"));
        }

        Ok(Self {
            client: build_client(REQUEST_TIMEOUT_SECS)?,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part { text: SYSTEM_PROMPT.to_string() }],
            },
            contents: vec![Content {
                parts: vec![Part { text: prompt.to_string() }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: 2000,
                response_mime_type: "application/json",
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| send_error(ProviderKind::Gemini, e, &url, REQUEST_TIMEOUT_SECS))?;

        if !response.status().is_success() {
            return Err(error_for_status(ProviderKind::Gemini, response, &url).await);
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| NameForgeError::parse(e.to_string(), None))?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| NameForgeError::provider(ProviderKind::Gemini, "No candidates returned"))
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}
