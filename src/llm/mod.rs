//! LLM integration: the external generation service behind the AI pipeline
//!
//! The pipeline only sees [`NamingService`]. [`LlmNamingService`] implements it
//! on top of any configured [`LlmProvider`].

pub mod prompts;
pub mod providers;
pub mod service;

pub use service::{LlmNamingService, ServiceMetrics, ServiceMetricsSnapshot};

use crate::error::Result;
use crate::types::{CreativeName, CreativeRequest, LlmConfig, ProviderKind, RankedName, SeedWords};
use async_trait::async_trait;

/// The three collaborator calls the naming pipeline makes
#[async_trait]
pub trait NamingService: Send + Sync {
    /// Categorised seed words for a free-text concept
    async fn seed_words(&self, concept: &str) -> Result<SeedWords>;

    /// Externally invented names
    async fn creative_names(&self, request: &CreativeRequest) -> Result<Vec<CreativeName>>;

    /// Scores and reasoning for an explicit list of candidates
    async fn rank_names(&self, concept: &str, names: &[String]) -> Result<Vec<RankedName>>;
}

/// Core trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one prompt, return the raw reply text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Get model name being used
    fn model(&self) -> &str;

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Create an LLM provider from configuration
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn LlmProvider>> {
    match config.provider {
        ProviderKind::OpenAi => Ok(Box::new(providers::OpenAiProvider::new(config)?)),
        ProviderKind::Anthropic => Ok(Box::new(providers::AnthropicProvider::new(config)?)),
        ProviderKind::Gemini => Ok(Box::new(providers::GeminiProvider::new(config)?)),
        ProviderKind::Ollama => Ok(Box::new(providers::OllamaProvider::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_matches_kind() {
        let config = LlmConfig {
            provider: ProviderKind::Ollama,
            model: "llama3.1".to_string(),
            ..Default::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "ollama");
        assert_eq!(provider.model(), "llama3.1");
        assert!(provider.is_ready());
    }

    #[test]
    fn test_create_provider_surfaces_config_errors() {
        let config = LlmConfig {
            provider: ProviderKind::Anthropic,
            ..Default::default()
        };
        assert!(create_provider(&config).is_err());
    }
}
