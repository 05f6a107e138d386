//! Provider configuration from environment variables

use crate::error::{NameForgeError, Result};
use crate::llm::LlmNamingService;
use crate::types::{LlmConfig, ProviderKind};

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-0";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1";

/// Environment variable that picks the default provider
pub const PROVIDER_VAR: &str = "NAME_FORGE_PROVIDER";

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Provider configs found through `lookup`, in preference order
/// (OpenAI, Anthropic, Gemini, Ollama).
///
/// Hosted providers need an API key. Ollama is enabled by `OLLAMA_MODEL` or
/// `OLLAMA_BASE_URL`.
pub fn providers_from_vars<F>(lookup: F) -> Vec<LlmConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut configs = Vec::new();

    if let Some(api_key) = var("OPENAI_API_KEY") {
        configs.push(LlmConfig {
            provider: ProviderKind::OpenAi,
            model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            api_key,
            base_url: var("OPENAI_BASE_URL"),
            temperature: DEFAULT_TEMPERATURE,
        });
    }

    if let Some(api_key) = var("ANTHROPIC_API_KEY") {
        configs.push(LlmConfig {
            provider: ProviderKind::Anthropic,
            model: var("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()),
            api_key,
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
        });
    }

    if let Some(api_key) = var("GEMINI_API_KEY") {
        configs.push(LlmConfig {
            provider: ProviderKind::Gemini,
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            api_key,
            base_url: None,
            temperature: DEFAULT_TEMPERATURE,
        });
    }

    let ollama_model = var("OLLAMA_MODEL");
    let ollama_url = var("OLLAMA_BASE_URL");
    if ollama_model.is_some() || ollama_url.is_some() {
        configs.push(LlmConfig {
            provider: ProviderKind::Ollama,
            model: ollama_model.unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
            api_key: String::new(),
            base_url: ollama_url,
            temperature: DEFAULT_TEMPERATURE,
        });
    }

    configs
}

/// Provider configs from the process environment
pub fn providers_from_env() -> Vec<LlmConfig> {
    providers_from_vars(|key| std::env::var(key).ok())
}

/// Default provider requested through [`PROVIDER_VAR`], if any
pub fn preferred_provider_from_env() -> Result<Option<ProviderKind>> {
    match std::env::var(PROVIDER_VAR) {
        Ok(value) if !value.trim().is_empty() => value.trim().parse().map(Some),
        _ => Ok(None),
    }
}

/// Build a naming service from `configs`.
///
/// `preferred` overrides the registration-order default. Fails when nothing is
/// configured or the preferred provider is missing.
pub fn build_service(configs: &[LlmConfig], preferred: Option<ProviderKind>) -> Result<LlmNamingService> {
    let service = LlmNamingService::new();
    for config in configs {
        service.add_provider(config)?;
        tracing::debug!(provider = %config.provider, model = %config.model, "Provider configured");
    }

    if let Some(kind) = preferred {
        if !service.set_default_provider(kind) {
            return Err(NameForgeError::config(format!(
                "Provider '{}' requested but not configured",
                kind
            )));
        }
    }

    if !service.is_ready() {
        return Err(NameForgeError::config(
            "No LLM providers configured. Set OPENAI_API_KEY, ANTHROPIC_API_KEY, GEMINI_API_KEY or OLLAMA_MODEL.",
        ));
    }

    Ok(service)
}
