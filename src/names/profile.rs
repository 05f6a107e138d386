//! Naming profiles: one engine, configured per naming domain
//!
//! A profile bundles the vocabularies, the style-to-affix mapping and the
//! scoring constants. Two are built in: [`STARTUP`] for company names and
//! [`PRODUCT`] for product names.

use super::scoring::ScoringRules;
use super::words::{self, WordBank, WordList};
use crate::types::NameStyle;

/// Affix groups a style draws from, in priority order
#[derive(Debug)]
pub struct StyleAffixes {
    pub style: NameStyle,
    pub prefix_groups: WordList,
    pub suffix_groups: WordList,
}

/// Complete engine configuration for one naming domain
#[derive(Debug)]
pub struct NamingProfile {
    pub name: &'static str,
    /// Industry or product-category vocabularies
    pub categories: WordBank,
    pub prefixes: WordBank,
    pub suffixes: WordBank,
    pub positive_words: WordList,
    pub action_verbs: WordList,
    pub adjectives: WordList,
    /// Single-letter prefixes for the letter+word pattern
    pub letters: WordList,
    pub styles: &'static [StyleAffixes],
    pub scoring: ScoringRules,
}

impl NamingProfile {
    /// Look up a built-in profile by name
    pub fn by_name(name: &str) -> Option<&'static NamingProfile> {
        ALL_PROFILES
            .iter()
            .copied()
            .find(|profile| profile.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Word list for a category tag (unknown tags fall back to the default)
    pub fn category_words(&self, tag: &str) -> WordList {
        self.categories.lookup_category(tag)
    }

    /// Prefixes for a style, concatenated across its groups
    pub fn prefixes_for(&self, style: NameStyle) -> Vec<&'static str> {
        let groups: WordList = self.affixes_for(style).map(|a| a.prefix_groups).unwrap_or(&[]);
        collect_groups(&self.prefixes, groups)
    }

    /// Suffixes for a style, concatenated across its groups
    pub fn suffixes_for(&self, style: NameStyle) -> Vec<&'static str> {
        let groups: WordList = self.affixes_for(style).map(|a| a.suffix_groups).unwrap_or(&[]);
        collect_groups(&self.suffixes, groups)
    }

    fn affixes_for(&self, style: NameStyle) -> Option<&StyleAffixes> {
        self.styles.iter().find(|affixes| affixes.style == style)
    }
}

fn collect_groups(bank: &WordBank, groups: WordList) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for group in groups {
        for &word in bank.lookup_category(group) {
            if !out.contains(&word) {
                out.push(word);
            }
        }
    }
    out
}

/// Canonical startup-name configuration
pub static STARTUP: NamingProfile = NamingProfile {
    name: "startup",
    categories: WordBank::new(words::STARTUP_INDUSTRIES, words::STARTUP_DEFAULT),
    prefixes: WordBank::new(words::STARTUP_PREFIXES, words::STARTUP_DEFAULT),
    suffixes: WordBank::new(words::STARTUP_SUFFIXES, words::STARTUP_DEFAULT),
    positive_words: words::STARTUP_POSITIVE,
    action_verbs: words::STARTUP_ACTIONS,
    adjectives: words::STARTUP_ADJECTIVES,
    letters: words::STARTUP_LETTERS,
    styles: &[
        StyleAffixes { style: NameStyle::Modern, prefix_groups: &["modern"], suffix_groups: &["modern", "tech"] },
        StyleAffixes { style: NameStyle::Classic, prefix_groups: &["classic"], suffix_groups: &["classic"] },
        StyleAffixes { style: NameStyle::Playful, prefix_groups: &["playful", "modern"], suffix_groups: &["playful"] },
        StyleAffixes { style: NameStyle::Professional, prefix_groups: &["professional", "classic"], suffix_groups: &["professional"] },
        StyleAffixes { style: NameStyle::Techy, prefix_groups: &["tech", "modern"], suffix_groups: &["tech", "modern"] },
    ],
    scoring: ScoringRules {
        vowel_ratio: (0.25, 0.5),
        good_suffixes: &[
            "hub", "base", "flow", "sync", "pro", "ly", "ify", "io", "labs", "stack", "ai", "app",
        ],
        camel_case_bonus: true,
        leading_consonants: None,
    },
};

/// Product-name configuration
pub static PRODUCT: NamingProfile = NamingProfile {
    name: "product",
    categories: WordBank::new(words::PRODUCT_CATEGORIES, words::PRODUCT_DEFAULT),
    prefixes: WordBank::new(words::PRODUCT_PREFIXES, words::PRODUCT_DEFAULT),
    suffixes: WordBank::new(words::PRODUCT_SUFFIXES, words::PRODUCT_DEFAULT),
    positive_words: words::PRODUCT_POSITIVE,
    action_verbs: words::PRODUCT_ACTIONS,
    adjectives: words::PRODUCT_ADJECTIVES,
    letters: words::PRODUCT_LETTERS,
    styles: &[
        StyleAffixes { style: NameStyle::Modern, prefix_groups: &["modern"], suffix_groups: &["modern"] },
        StyleAffixes { style: NameStyle::Classic, prefix_groups: &["classic"], suffix_groups: &["classic", "professional"] },
        StyleAffixes { style: NameStyle::Playful, prefix_groups: &["playful"], suffix_groups: &["playful", "modern"] },
        StyleAffixes { style: NameStyle::Professional, prefix_groups: &["professional"], suffix_groups: &["professional", "classic"] },
        StyleAffixes { style: NameStyle::Techy, prefix_groups: &["tech", "modern"], suffix_groups: &["tech"] },
    ],
    scoring: ScoringRules {
        vowel_ratio: (0.2, 0.6),
        good_suffixes: &[
            "kit", "box", "pad", "go", "max", "one", "pro", "ly", "ify", "io", "hub", "flow",
        ],
        camel_case_bonus: false,
        leading_consonants: Some(&['b', 'c', 'd', 'f', 'g', 'l', 'm', 'p', 's', 't']),
    },
};

pub static ALL_PROFILES: [&NamingProfile; 2] = [&STARTUP, &PRODUCT];
