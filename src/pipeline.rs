//! AI-augmented naming pipeline
//!
//! Runs seed → pattern → creative → merge → optional validate → sort → enrich,
//! strictly in that order. Every collaborator call is awaited before the next
//! step starts, and any failure aborts the whole run.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::llm::NamingService;
use crate::names::{domains, ranking, NameEngine};
use crate::types::{
    CreativeName, CreativeRequest, GenerateOptions, GeneratedName, NameWithDomain, PatternType,
    RankedName, SeedWords,
};

/// Score given to invented names until the collaborator ranks them
pub const INVENTED_DEFAULT_SCORE: u8 = 70;

/// Percentage of the requested count filled by pattern generation
pub const PATTERN_SHARE_PCT: usize = 70;

/// Percentage of the requested count requested as invented names
pub const CREATIVE_SHARE_PCT: usize = 30;

/// Orchestrates the engine and the naming collaborator for one concept
#[derive(Clone)]
pub struct NamePipeline {
    engine: NameEngine,
    service: Arc<dyn NamingService>,
}

impl NamePipeline {
    /// Pipeline over the startup profile
    pub fn new(service: Arc<dyn NamingService>) -> Self {
        Self::with_engine(NameEngine::startup(), service)
    }

    pub fn with_engine(engine: NameEngine, service: Arc<dyn NamingService>) -> Self {
        Self { engine, service }
    }

    pub fn engine(&self) -> &NameEngine {
        &self.engine
    }

    /// Full pipeline for one free-text concept
    pub async fn generate_startup_names(
        &self,
        concept: &str,
        options: &GenerateOptions,
    ) -> Result<Vec<NameWithDomain>> {
        tracing::info!(concept, count = options.count, "Requesting seed words");
        let seeds = self.service.seed_words(concept).await?;

        if options.count == 0 {
            return Ok(Vec::new());
        }

        let (pattern_count, creative_count) = split_count(options.count);

        let pattern_options = GenerateOptions {
            keywords: seeded_keywords(&options.keywords, &seeds),
            count: pattern_count,
            ..options.clone()
        };
        let patterned = self.engine.generate_names(&pattern_options);
        tracing::info!(
            keywords = pattern_options.keywords.len(),
            generated = patterned.len(),
            "Pattern generation finished"
        );

        let request = CreativeRequest {
            concept: concept.to_string(),
            count: creative_count,
            style: options.style,
        };
        let invented: Vec<GeneratedName> = self
            .service
            .creative_names(&request)
            .await?
            .into_iter()
            .map(invented_name)
            .collect();
        tracing::info!(requested = creative_count, received = invented.len(), "Creative names received");

        // no cross-source dedup here, unlike the pattern-only path
        let mut merged = patterned;
        merged.extend(invented);

        if options.validate {
            let candidates: Vec<String> = merged.iter().map(|n| n.name.clone()).collect();
            tracing::info!(candidates = candidates.len(), "Requesting ranking");
            let ranked = self.service.rank_names(concept, &candidates).await?;
            apply_ranking(&mut merged, ranked);
        }

        ranking::sort_by_score(&mut merged);
        merged.truncate(options.count);

        tracing::info!(returned = merged.len(), domains = options.include_domains, "Pipeline completed");

        Ok(if options.include_domains {
            domains::enrich(merged)
        } else {
            merged
                .into_iter()
                .map(|name| NameWithDomain { name, domains: Vec::new() })
                .collect()
        })
    }
}

/// Pattern and creative shares for a requested count
pub fn split_count(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    // ceil(count * pct / 100) without overflowing on huge counts
    let share = |pct: usize| count / 100 * pct + (count % 100 * pct).div_ceil(100);
    (share(PATTERN_SHARE_PCT), share(CREATIVE_SHARE_PCT).max(1))
}

/// Caller keywords followed by the core, related and action seed words
fn seeded_keywords(keywords: &[String], seeds: &SeedWords) -> Vec<String> {
    keywords
        .iter()
        .chain(&seeds.core)
        .chain(&seeds.related)
        .chain(&seeds.action)
        .cloned()
        .collect()
}

fn invented_name(creative: CreativeName) -> GeneratedName {
    GeneratedName {
        sources: vec![creative.name.clone()],
        name: creative.name,
        pattern: PatternType::Invented,
        score: INVENTED_DEFAULT_SCORE,
        reasoning: Some(creative.meaning).filter(|m| !m.is_empty()),
    }
}

/// Overwrite score and reasoning for every exact name match
fn apply_ranking(names: &mut [GeneratedName], ranked: Vec<RankedName>) {
    let by_name: HashMap<String, RankedName> =
        ranked.into_iter().map(|r| (r.name.clone(), r)).collect();

    for name in names.iter_mut() {
        if let Some(rank) = by_name.get(&name.name) {
            name.score = rank.score.round().clamp(0.0, 100.0) as u8;
            name.reasoning = Some(rank.reasoning.clone());
        }
    }
}
