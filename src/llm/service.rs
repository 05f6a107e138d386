//! LLM-backed naming service

use crate::error::{NameForgeError, Result};
use crate::llm::{create_provider, prompts, LlmProvider, NamingService};
use crate::types::{CreativeName, CreativeRequest, LlmConfig, ProviderKind, RankedName, SeedWords};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Call counters for the naming service
#[derive(Debug, Default)]
pub struct ServiceMetrics {
    api_calls: AtomicU64,
    errors: AtomicU64,
    total_latency_ms: AtomicU64,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, elapsed_ms: u64, ok: bool) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
        self.total_latency_ms.fetch_add(elapsed_ms, Ordering::Relaxed);
        if !ok {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> ServiceMetricsSnapshot {
        ServiceMetricsSnapshot {
            api_calls: self.api_calls.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            total_latency_ms: self.total_latency_ms.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`ServiceMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceMetricsSnapshot {
    pub api_calls: u64,
    pub errors: u64,
    pub total_latency_ms: u64,
}

impl ServiceMetricsSnapshot {
    pub fn avg_latency_ms(&self) -> f64 {
        if self.api_calls == 0 {
            0.0
        } else {
            self.total_latency_ms as f64 / self.api_calls as f64
        }
    }
}

/// Naming service that routes every call through one registered provider.
///
/// Several providers can be registered; calls go to the default one. There is
/// no fallback between providers and no retry.
#[derive(Clone)]
pub struct LlmNamingService {
    providers: Arc<RwLock<HashMap<ProviderKind, Arc<dyn LlmProvider>>>>,
    default_provider: Arc<RwLock<Option<ProviderKind>>>,
    metrics: Arc<ServiceMetrics>,
}

impl LlmNamingService {
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
            default_provider: Arc::new(RwLock::new(None)),
            metrics: Arc::new(ServiceMetrics::new()),
        }
    }

    /// Build and register a provider; the first one registered becomes the default
    pub fn add_provider(&self, config: &LlmConfig) -> Result<()> {
        let provider = create_provider(config)?;
        self.register(config.provider, Arc::from(provider));
        Ok(())
    }

    /// Register an already constructed provider
    pub fn register(&self, kind: ProviderKind, provider: Arc<dyn LlmProvider>) {
        self.providers.write().insert(kind, provider);
        let mut default = self.default_provider.write();
        if default.is_none() {
            *default = Some(kind);
        }
    }

    /// Switch the default provider; ignored if that provider is not registered
    pub fn set_default_provider(&self, kind: ProviderKind) -> bool {
        if !self.has_provider(kind) {
            return false;
        }
        *self.default_provider.write() = Some(kind);
        true
    }

    pub fn default_provider(&self) -> Option<ProviderKind> {
        *self.default_provider.read()
    }

    pub fn has_provider(&self, kind: ProviderKind) -> bool {
        self.providers.read().contains_key(&kind)
    }

    pub fn available_providers(&self) -> Vec<ProviderKind> {
        let providers = self.providers.read();
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| providers.contains_key(kind))
            .collect()
    }

    pub fn is_ready(&self) -> bool {
        self.active_provider().map_or(false, |p| p.is_ready())
    }

    pub fn metrics(&self) -> ServiceMetricsSnapshot {
        self.metrics.snapshot()
    }

    fn active_provider(&self) -> Result<Arc<dyn LlmProvider>> {
        let kind = self
            .default_provider()
            .ok_or_else(|| NameForgeError::config("No LLM providers configured"))?;
        // clone the Arc so no lock is held across the request
        self.providers
            .read()
            .get(&kind)
            .cloned()
            .ok_or_else(|| NameForgeError::config(format!("Provider not configured: {}", kind)))
    }

    async fn ask(&self, purpose: &'static str, prompt: String) -> Result<String> {
        let provider = self.active_provider()?;
        let start = Instant::now();

        let result = provider.complete(&prompt).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        self.metrics.record(elapsed_ms, result.is_ok());

        match &result {
            Ok(reply) => tracing::debug!(
                provider = provider.name(),
                model = provider.model(),
                purpose,
                reply_len = reply.len(),
                duration_ms = elapsed_ms,
                "LLM call completed"
            ),
            Err(e) => tracing::warn!(
                provider = provider.name(),
                purpose,
                error = %e,
                duration_ms = elapsed_ms,
                "LLM call failed"
            ),
        }

        result
    }
}

impl Default for LlmNamingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NamingService for LlmNamingService {
    async fn seed_words(&self, concept: &str) -> Result<SeedWords> {
        let reply = self.ask("seed_words", prompts::seed_words_prompt(concept)).await?;
        prompts::parse_seed_words(&reply)
    }

    async fn creative_names(&self, request: &CreativeRequest) -> Result<Vec<CreativeName>> {
        let reply = self
            .ask("creative_names", prompts::creative_names_prompt(request))
            .await?;
        prompts::parse_creative_names(&reply)
    }

    async fn rank_names(&self, concept: &str, names: &[String]) -> Result<Vec<RankedName>> {
        let reply = self
            .ask("rank_names", prompts::rank_names_prompt(concept, names))
            .await?;
        prompts::parse_ranked_names(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Provider double that replays canned replies
    struct CannedProvider {
        replies: Mutex<Vec<Result<String>>>,
        prompts: Mutex<Vec<String>>,
    }

    impl CannedProvider {
        fn new(replies: Vec<Result<String>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().push(prompt.to_string());
            self.replies.lock().remove(0)
        }

        fn name(&self) -> &'static str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-1"
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_unconfigured_service_fails_fast() {
        let service = LlmNamingService::new();
        assert!(!service.is_ready());
        let err = tokio_test::block_on(service.seed_words("pets")).unwrap_err();
        assert!(matches!(err, NameForgeError::Config { .. }));
    }

    #[test]
    fn test_first_registered_provider_is_default() {
        let service = LlmNamingService::new();
        service.register(ProviderKind::Ollama, Arc::new(CannedProvider::new(Vec::new())));
        service.register(ProviderKind::OpenAi, Arc::new(CannedProvider::new(Vec::new())));
        assert_eq!(service.default_provider(), Some(ProviderKind::Ollama));
        assert_eq!(
            service.available_providers(),
            vec![ProviderKind::OpenAi, ProviderKind::Ollama]
        );
        assert!(service.set_default_provider(ProviderKind::OpenAi));
        assert!(!service.set_default_provider(ProviderKind::Gemini));
        assert_eq!(service.default_provider(), Some(ProviderKind::OpenAi));
    }

    #[tokio::test]
    async fn test_round_trip_through_provider() {
        let provider = Arc::new(CannedProvider::new(vec![
            Ok(r#"{"core": ["pet", "dog"]}"#.to_string()),
            Ok(r#"[{"name": "Pawly", "score": 91, "reasoning": "short"}]"#.to_string()),
        ]));
        let service = LlmNamingService::new();
        service.register(ProviderKind::OpenAi, provider.clone());

        let seeds = service.seed_words("dog walking").await.unwrap();
        assert_eq!(seeds.core, vec!["pet", "dog"]);

        let ranked = service.rank_names("dog walking", &["Pawly".to_string()]).await.unwrap();
        assert_eq!(ranked[0].score, 91.0);

        let prompts = provider.prompts.lock();
        assert!(prompts[0].contains("dog walking"));
        assert!(prompts[1].contains("- Pawly"));
        assert_eq!(service.metrics().api_calls, 2);
        assert_eq!(service.metrics().errors, 0);
    }

    #[tokio::test]
    async fn test_provider_failure_is_returned_unchanged() {
        let provider = Arc::new(CannedProvider::new(vec![Err(NameForgeError::rate_limit(
            "quota",
            Some(10),
        ))]));
        let service = LlmNamingService::new();
        service.register(ProviderKind::Anthropic, provider);

        let request = CreativeRequest {
            concept: "pets".to_string(),
            count: 3,
            style: Default::default(),
        };
        let err = service.creative_names(&request).await.unwrap_err();
        assert!(matches!(err, NameForgeError::RateLimit { retry_after: Some(10), .. }));
        assert_eq!(service.metrics().errors, 1);
    }
}
