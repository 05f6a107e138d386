//! Pattern-only name generation

use super::domains;
use super::patterns::PatternContext;
use super::profile::{NamingProfile, PRODUCT, STARTUP};
use super::ranking::aggregate;
use super::words::word_pool;
use crate::types::{GenerateOptions, GeneratedName, NameWithDomain, PatternType};

/// Deterministic name generator bound to one naming profile
#[derive(Debug, Clone, Copy)]
pub struct NameEngine {
    profile: &'static NamingProfile,
}

impl NameEngine {
    pub fn new(profile: &'static NamingProfile) -> Self {
        Self { profile }
    }

    /// Engine configured for startup names
    pub fn startup() -> Self {
        Self::new(&STARTUP)
    }

    /// Engine configured for product names
    pub fn product() -> Self {
        Self::new(&PRODUCT)
    }

    pub fn profile(&self) -> &'static NamingProfile {
        self.profile
    }

    /// Generate, score, deduplicate and rank candidates. No external calls.
    pub fn generate_names(&self, options: &GenerateOptions) -> Vec<GeneratedName> {
        let category_words = self.profile.category_words(&options.category);
        let pool = word_pool(&options.keywords, category_words);
        let ctx = PatternContext::new(self.profile, &pool, options.style);

        let streams: Vec<Vec<GeneratedName>> = PatternType::GENERATED
            .into_iter()
            .filter(|kind| options.patterns.contains(kind))
            .map(|kind| ctx.generate(kind))
            .collect();

        let candidates: usize = streams.iter().map(Vec::len).sum();
        let ranked = aggregate(streams, options.min_score, options.count);

        tracing::debug!(
            profile = self.profile.name,
            pool_size = pool.len(),
            candidates,
            returned = ranked.len(),
            "Pattern generation completed"
        );

        ranked
    }

    /// Same as [`generate_names`](Self::generate_names), plus domain suggestions
    pub fn generate_names_with_domains(&self, options: &GenerateOptions) -> Vec<NameWithDomain> {
        domains::enrich(self.generate_names(options))
    }
}

impl Default for NameEngine {
    fn default() -> Self {
        Self::startup()
    }
}

/// Pattern-only generation with the startup profile
pub fn generate_names(options: &GenerateOptions) -> Vec<GeneratedName> {
    NameEngine::startup().generate_names(options)
}

/// Pattern-only generation with domain suggestions, startup profile
pub fn generate_names_with_domains(options: &GenerateOptions) -> Vec<NameWithDomain> {
    NameEngine::startup().generate_names_with_domains(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NameStyle;

    fn options(keywords: &[&str], count: usize, min_score: u8) -> GenerateOptions {
        GenerateOptions {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            count,
            min_score,
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_names_respects_count_and_threshold() {
        let names = generate_names(&options(&["data"], 15, 70));
        assert!(names.len() <= 15);
        assert!(names.iter().all(|n| n.score >= 70));
    }

    #[test]
    fn test_pattern_filter_limits_sources() {
        let opts = GenerateOptions {
            patterns: vec![PatternType::WordSuffix],
            ..options(&["data"], 50, 0)
        };
        let names = generate_names(&opts);
        assert!(!names.is_empty());
        assert!(names.iter().all(|n| n.pattern == PatternType::WordSuffix));
    }

    #[test]
    fn test_empty_pattern_set_yields_nothing() {
        let opts = GenerateOptions {
            patterns: Vec::new(),
            ..options(&["data"], 10, 0)
        };
        assert!(generate_names(&opts).is_empty());
    }

    #[test]
    fn test_run_order_ignores_option_order() {
        let forward = GenerateOptions {
            patterns: vec![PatternType::PrefixWord, PatternType::Compound],
            ..options(&["data"], 40, 0)
        };
        let reversed = GenerateOptions {
            patterns: vec![PatternType::Compound, PatternType::PrefixWord],
            ..forward.clone()
        };
        assert_eq!(generate_names(&forward), generate_names(&reversed));
    }

    #[test]
    fn test_profiles_produce_different_results() {
        let opts = GenerateOptions {
            style: NameStyle::Techy,
            ..options(&["data"], 10, 0)
        };
        assert_ne!(
            NameEngine::startup().generate_names(&opts),
            NameEngine::product().generate_names(&opts)
        );
    }

    #[test]
    fn test_with_domains_wraps_each_name() {
        let names = generate_names_with_domains(&options(&["cloud"], 5, 0));
        assert_eq!(names.len(), 5);
        for entry in &names {
            assert_eq!(entry.domains.len(), 9);
        }
    }
}
