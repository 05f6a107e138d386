//! LLM provider implementations
//!
//! Each provider only knows how to turn a prompt into reply text; prompt
//! construction and response parsing live in `llm::prompts`.

pub mod anthropic;
pub mod gemini;
pub mod ollama;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use crate::error::{NameForgeError, Result};
use crate::types::ProviderKind;
use reqwest::{Client, Response};
use std::time::Duration;

/// Client-side timeout for hosted providers
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Local inference is slower
pub const LOCAL_TIMEOUT_SECS: u64 = 60;

/// System instruction shared by providers that support one
pub const SYSTEM_PROMPT: &str =
    "You are a naming strategist for startups and products. Always answer with valid JSON only, no prose.";

pub(crate) fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(concat!("name-forge/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| NameForgeError::network(e.to_string(), None, None))
}

/// Turn a non-success response into the matching error variant
pub(crate) async fn error_for_status(
    provider: ProviderKind,
    response: Response,
    url: &str,
) -> NameForgeError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

    match status.as_u16() {
        401 | 403 => NameForgeError::authentication(format!(
            "{} rejected the credentials ({})",
            provider, status
        )),
        429 => NameForgeError::rate_limit(format!("{} quota exhausted", provider), retry_after),
        500..=599 => NameForgeError::network(
            format!("{} server error ({}). The API service is experiencing issues", provider, status),
            Some(status.as_u16()),
            Some(url.to_string()),
        ),
        _ => NameForgeError::network(
            format!("{} request failed ({}): {}", provider, status, error_text),
            Some(status.as_u16()),
            Some(url.to_string()),
        ),
    }
}

/// Map a transport failure, keeping timeouts distinguishable
pub(crate) fn send_error(
    provider: ProviderKind,
    err: reqwest::Error,
    url: &str,
    timeout_secs: u64,
) -> NameForgeError {
    if err.is_timeout() {
        return NameForgeError::timeout(format!("{} request", provider), timeout_secs);
    }
    NameForgeError::network(
        format!("Failed to connect to {}: {}", provider, err),
        None,
        Some(url.to_string()),
    )
}
