//! Core types and structures for name-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::NameForgeError;

/// LLM provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Gemini,
    Ollama,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::Gemini,
        ProviderKind::Ollama,
    ];
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::OpenAi => write!(f, "openai"),
            ProviderKind::Anthropic => write!(f, "anthropic"),
            ProviderKind::Gemini => write!(f, "gemini"),
            ProviderKind::Ollama => write!(f, "ollama"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = NameForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "anthropic" | "claude" => Ok(ProviderKind::Anthropic),
            "gemini" => Ok(ProviderKind::Gemini),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(NameForgeError::config(format!(
                "Unsupported LLM provider: {}. Supported providers: openai, anthropic, gemini, ollama",
                other
            ))),
        }
    }
}

/// Naming pattern that produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternType {
    PrefixWord,
    WordSuffix,
    Compound,
    ModifiedSpelling,
    LetterWord,
    ActionObject,
    AdjectiveNoun,
    /// Names invented by the AI collaborator rather than a local pattern
    Invented,
}

impl PatternType {
    /// Patterns the local generators know how to produce, in run order
    pub const GENERATED: [PatternType; 7] = [
        PatternType::PrefixWord,
        PatternType::WordSuffix,
        PatternType::Compound,
        PatternType::ModifiedSpelling,
        PatternType::LetterWord,
        PatternType::ActionObject,
        PatternType::AdjectiveNoun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternType::PrefixWord => "prefix-word",
            PatternType::WordSuffix => "word-suffix",
            PatternType::Compound => "compound",
            PatternType::ModifiedSpelling => "modified-spelling",
            PatternType::LetterWord => "letter-word",
            PatternType::ActionObject => "action-object",
            PatternType::AdjectiveNoun => "adjective-noun",
            PatternType::Invented => "invented",
        }
    }
}

impl std::fmt::Display for PatternType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = NameForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        PatternType::GENERATED
            .into_iter()
            .chain(std::iter::once(PatternType::Invented))
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| NameForgeError::validation(format!("Unknown pattern: {}", s)))
    }
}

/// Naming style; selects which affix groups the prefix/suffix patterns draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    #[default]
    Modern,
    Classic,
    Playful,
    Professional,
    Techy,
}

impl NameStyle {
    pub const ALL: [NameStyle; 5] = [
        NameStyle::Modern,
        NameStyle::Classic,
        NameStyle::Playful,
        NameStyle::Professional,
        NameStyle::Techy,
    ];
}

impl std::fmt::Display for NameStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameStyle::Modern => write!(f, "modern"),
            NameStyle::Classic => write!(f, "classic"),
            NameStyle::Playful => write!(f, "playful"),
            NameStyle::Professional => write!(f, "professional"),
            NameStyle::Techy => write!(f, "techy"),
        }
    }
}

impl FromStr for NameStyle {
    type Err = NameForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "modern" => Ok(NameStyle::Modern),
            "classic" => Ok(NameStyle::Classic),
            "playful" => Ok(NameStyle::Playful),
            "professional" => Ok(NameStyle::Professional),
            "techy" | "tech" => Ok(NameStyle::Techy),
            other => Err(NameForgeError::validation(format!("Unknown style: {}", other))),
        }
    }
}

/// A candidate name with its provenance and score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedName {
    pub name: String,
    pub pattern: PatternType,
    /// Word fragments the name was built from, in order
    pub sources: Vec<String>,
    /// Always within 0..=100
    pub score: u8,
    /// Only set for AI-sourced or AI-ranked candidates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// Heuristic domain suggestion for a name; never a real availability lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSuggestion {
    pub domain: String,
    pub tld: String,
    pub likely_available: bool,
}

/// A generated name enriched with domain suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameWithDomain {
    #[serde(flatten)]
    pub name: GeneratedName,
    pub domains: Vec<DomainSuggestion>,
}

/// Categorised seed words returned by the collaborator for one concept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedWords {
    pub core: Vec<String>,
    pub related: Vec<String>,
    pub emotional: Vec<String>,
    pub action: Vec<String>,
    pub modifier: Vec<String>,
}

/// A name invented by the collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeName {
    pub name: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub style: String,
}

/// Request for collaborator-invented names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreativeRequest {
    pub concept: String,
    pub count: usize,
    pub style: NameStyle,
}

/// A collaborator quality assessment for one candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedName {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub reasoning: String,
}

/// Options accepted by the generation entry points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    pub keywords: Vec<String>,
    /// Industry or product category tag; unknown tags fall back to the default bank
    pub category: String,
    pub style: NameStyle,
    pub count: usize,
    pub patterns: Vec<PatternType>,
    pub min_score: u8,
    /// Ask the collaborator to re-rank (AI pipeline only)
    pub validate: bool,
    pub include_domains: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            category: "default".to_string(),
            style: NameStyle::Modern,
            count: 20,
            patterns: PatternType::GENERATED.to_vec(),
            min_score: 50,
            validate: false,
            include_domains: false,
        }
    }
}

/// Serializable summary of one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameReport {
    pub profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub names: Vec<NameWithDomain>,
}

impl NameReport {
    pub fn new(profile: impl Into<String>, concept: Option<String>, names: Vec<NameWithDomain>) -> Self {
        Self {
            profile: profile.into(),
            concept,
            generated_at: Utc::now(),
            names,
        }
    }
}

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: ProviderKind,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::OpenAi,
            model: "gpt-4.1-mini".to_string(),
            api_key: String::new(),
            base_url: None,
            temperature: 0.7,
        }
    }
}
