//! Naming pattern catalog and the combinatorial generators behind it

use super::modifiers::MODIFIERS;
use super::profile::NamingProfile;
use super::scoring::score;
use crate::types::{GeneratedName, NameStyle, PatternType};

/// Affix lists are bounded to this many entries
const AFFIX_LIMIT: usize = 10;
/// Word pool bound for single-list patterns (prefix, suffix, modified)
const WORD_LIMIT: usize = 10;
/// Word pool bound for the pairwise patterns
const PAIR_LIMIT: usize = 8;
/// Positive words appended to the right side of compounds
const POSITIVE_LIMIT: usize = 5;

/// A documented naming strategy
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub kind: PatternType,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    /// Informational only; generation is exhaustive
    pub weight: f32,
}

/// Every locally generated pattern, in run order
pub const PATTERNS: &[Pattern] = &[
    Pattern {
        kind: PatternType::PrefixWord,
        description: "Style prefix followed by a keyword",
        examples: &["GetData", "HeyTask", "NeoCloud"],
        weight: 0.15,
    },
    Pattern {
        kind: PatternType::WordSuffix,
        description: "Keyword followed by a style suffix",
        examples: &["DataHub", "Taskify", "CodeLabs"],
        weight: 0.2,
    },
    Pattern {
        kind: PatternType::Compound,
        description: "Two distinct words joined together",
        examples: &["CloudNest", "MindSpark", "ShopGlow"],
        weight: 0.2,
    },
    Pattern {
        kind: PatternType::ModifiedSpelling,
        description: "Keyword with a playful spelling change",
        examples: &["Flickr", "Cloudify", "Klik"],
        weight: 0.15,
    },
    Pattern {
        kind: PatternType::LetterWord,
        description: "Single lowercase letter before a keyword",
        examples: &["iCloud", "eTrade", "xData"],
        weight: 0.1,
    },
    Pattern {
        kind: PatternType::ActionObject,
        description: "Action verb followed by a keyword",
        examples: &["TrackTask", "BuildCode", "GrowFund"],
        weight: 0.1,
    },
    Pattern {
        kind: PatternType::AdjectiveNoun,
        description: "Adjective followed by a keyword",
        examples: &["SmartCart", "BoldMind", "FreshBite"],
        weight: 0.1,
    },
];

/// Catalog entry for a pattern type (`Invented` has none)
pub fn pattern_info(kind: PatternType) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.kind == kind)
}

/// First letter upper, rest lower
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Inputs shared by every generator for one run
#[derive(Debug, Clone, Copy)]
pub struct PatternContext<'a> {
    pub profile: &'a NamingProfile,
    /// Normalised keyword pool (keywords then category words)
    pub words: &'a [String],
    pub style: NameStyle,
}

impl<'a> PatternContext<'a> {
    pub fn new(profile: &'a NamingProfile, words: &'a [String], style: NameStyle) -> Self {
        Self { profile, words, style }
    }

    /// Run one generator; candidates come back scored, in append order
    pub fn generate(&self, kind: PatternType) -> Vec<GeneratedName> {
        let names = match kind {
            PatternType::PrefixWord => self.prefix_word(),
            PatternType::WordSuffix => self.word_suffix(),
            PatternType::Compound => self.compound(),
            PatternType::ModifiedSpelling => self.modified_spelling(),
            PatternType::LetterWord => self.letter_word(),
            PatternType::ActionObject => self.action_object(),
            PatternType::AdjectiveNoun => self.adjective_noun(),
            PatternType::Invented => Vec::new(),
        };
        tracing::debug!(pattern = %kind, candidates = names.len(), "Pattern generated");
        names
    }

    fn words(&self, limit: usize) -> &[String] {
        &self.words[..self.words.len().min(limit)]
    }

    fn candidate(&self, name: String, kind: PatternType, sources: Vec<String>) -> GeneratedName {
        let score = score(&name, &self.profile.scoring);
        GeneratedName {
            name,
            pattern: kind,
            sources,
            score,
            reasoning: None,
        }
    }

    fn join(&self, kind: PatternType, left: &str, right: &str) -> GeneratedName {
        let name = format!("{}{}", capitalize(left), capitalize(right));
        self.candidate(name, kind, vec![left.to_string(), right.to_string()])
    }

    fn prefix_word(&self) -> Vec<GeneratedName> {
        let prefixes = self.profile.prefixes_for(self.style);
        let mut out = Vec::new();
        for prefix in prefixes.iter().take(AFFIX_LIMIT) {
            for word in self.words(WORD_LIMIT) {
                out.push(self.join(PatternType::PrefixWord, prefix, word));
            }
        }
        out
    }

    fn word_suffix(&self) -> Vec<GeneratedName> {
        let suffixes = self.profile.suffixes_for(self.style);
        let mut out = Vec::new();
        for suffix in suffixes.iter().take(AFFIX_LIMIT) {
            for word in self.words(WORD_LIMIT) {
                out.push(self.join(PatternType::WordSuffix, word, suffix));
            }
        }
        out
    }

    fn compound(&self) -> Vec<GeneratedName> {
        let left = self.words(PAIR_LIMIT);
        let mut right: Vec<&str> = left.iter().map(String::as_str).collect();
        for &word in self.profile.positive_words.iter().take(POSITIVE_LIMIT) {
            if !right.contains(&word) {
                right.push(word);
            }
        }

        let mut out = Vec::new();
        for first in left {
            for second in &right {
                if first.eq_ignore_ascii_case(second) {
                    continue;
                }
                out.push(self.join(PatternType::Compound, first, second));
            }
        }
        out
    }

    fn modified_spelling(&self) -> Vec<GeneratedName> {
        let mut out = Vec::new();
        for word in self.words(WORD_LIMIT) {
            for modifier in MODIFIERS {
                let Some(modified) = (modifier.apply)(word).applied() else {
                    continue;
                };
                if modified == *word {
                    continue;
                }
                out.push(self.candidate(
                    capitalize(&modified),
                    PatternType::ModifiedSpelling,
                    vec![word.clone()],
                ));
            }
        }
        out
    }

    fn letter_word(&self) -> Vec<GeneratedName> {
        let mut out = Vec::new();
        for letter in self.profile.letters {
            for word in self.words(PAIR_LIMIT) {
                let name = format!("{}{}", letter.to_lowercase(), capitalize(word));
                out.push(self.candidate(
                    name,
                    PatternType::LetterWord,
                    vec![letter.to_string(), word.clone()],
                ));
            }
        }
        out
    }

    fn action_object(&self) -> Vec<GeneratedName> {
        let mut out = Vec::new();
        for verb in self.profile.action_verbs.iter().take(PAIR_LIMIT) {
            for word in self.words(PAIR_LIMIT) {
                out.push(self.join(PatternType::ActionObject, verb, word));
            }
        }
        out
    }

    fn adjective_noun(&self) -> Vec<GeneratedName> {
        let mut out = Vec::new();
        for adjective in self.profile.adjectives.iter().take(PAIR_LIMIT) {
            for word in self.words(PAIR_LIMIT) {
                out.push(self.join(PatternType::AdjectiveNoun, adjective, word));
            }
        }
        out
    }
}
