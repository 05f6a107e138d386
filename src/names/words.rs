//! Curated word banks for name generation
//!
//! Every table here is a process-wide constant. Profiles in `profile.rs` pick
//! which tables they expose; nothing ever writes to them.

use std::path::Path;

use crate::error::{NameForgeError, Result};

/// Ordered list of lowercase word fragments
pub type WordList = &'static [&'static str];

/// Categorised vocabulary with a guaranteed fallback
#[derive(Debug)]
pub struct WordBank {
    categories: &'static [(&'static str, WordList)],
    default: WordList,
}

impl WordBank {
    pub const fn new(categories: &'static [(&'static str, WordList)], default: WordList) -> Self {
        Self { categories, default }
    }

    /// Resolve a category tag to its word list.
    ///
    /// Matching ignores case and any non-letter characters, so `"E-Commerce"`
    /// finds `ecommerce`. Unknown tags resolve to the default list.
    pub fn lookup_category(&self, tag: &str) -> WordList {
        let wanted = normalize_word(tag);
        self.categories
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, words)| *words)
            .unwrap_or(self.default)
    }

    /// Whether the tag names a known category (the fallback does not count)
    pub fn contains(&self, tag: &str) -> bool {
        let wanted = normalize_word(tag);
        self.categories.iter().any(|(name, _)| *name == wanted)
    }

    /// Known category tags, in table order
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|(name, _)| *name)
    }

    pub fn default_words(&self) -> WordList {
        self.default
    }
}

/// Lowercase a fragment and keep ASCII letters only
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalise caller keywords, dropping anything that ends up empty
pub fn normalize_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    keywords
        .iter()
        .map(|k| normalize_word(k.as_ref()))
        .filter(|k| !k.is_empty())
        .collect()
}

/// Keyword pool fed to every pattern generator: keywords first, then the
/// category words, without repeats.
pub fn word_pool<S: AsRef<str>>(keywords: &[S], category_words: WordList) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    let candidates = normalize_keywords(keywords)
        .into_iter()
        .chain(category_words.iter().map(|w| w.to_string()));

    for word in candidates {
        if !pool.contains(&word) {
            pool.push(word);
        }
    }
    pool
}

/// Load extra keywords from a file (one per line, `#` starts a comment)
pub fn load_keywords(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| NameForgeError::io(e.to_string(), Some(path.display().to_string())))?;

    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();

    Ok(normalize_keywords(&lines))
}

// Startup vocabulary

pub const STARTUP_INDUSTRIES: &[(&str, WordList)] = &[
    ("tech", &["code", "data", "cloud", "byte", "logic", "pixel", "stack", "node", "sync", "bit"]),
    ("health", &["care", "vital", "pulse", "heal", "well", "life", "fit", "cure", "medi", "calm"]),
    ("finance", &["coin", "fund", "cash", "ledger", "vault", "wealth", "trade", "pay", "capital", "bank"]),
    ("education", &["learn", "mind", "skill", "study", "tutor", "class", "quiz", "mentor", "brain", "scholar"]),
    ("food", &["taste", "fresh", "chef", "spice", "feast", "bite", "grill", "harvest", "kitchen", "crave"]),
    ("travel", &["trip", "roam", "voyage", "journey", "wander", "route", "atlas", "compass", "trek", "nomad"]),
    ("social", &["connect", "share", "tribe", "circle", "buzz", "chat", "friend", "crowd", "link", "echo"]),
    ("ecommerce", &["shop", "cart", "market", "store", "deal", "bazaar", "trade", "basket", "mart", "order"]),
    ("productivity", &["task", "flow", "focus", "plan", "track", "sprint", "desk", "note", "agenda", "goal"]),
    ("creative", &["studio", "canvas", "craft", "muse", "design", "palette", "story", "spark", "ink", "frame"]),
];

pub const STARTUP_DEFAULT: WordList = &[
    "smart", "next", "bright", "core", "spark", "wave", "peak", "shift", "nest", "loop",
];

pub const STARTUP_PREFIXES: &[(&str, WordList)] = &[
    ("modern", &["go", "get", "try", "hey", "my", "up"]),
    ("tech", &["neo", "meta", "hyper", "nano", "cyber", "quantum"]),
    ("classic", &["true", "prime", "first", "royal", "noble"]),
    ("playful", &["happy", "bubble", "zip", "pop", "yay"]),
    ("professional", &["pro", "smart", "core", "alpha", "summit"]),
];

pub const STARTUP_SUFFIXES: &[(&str, WordList)] = &[
    ("modern", &["ly", "ify", "io", "hub", "flow"]),
    ("tech", &["labs", "stack", "sync", "base", "bit", "ops"]),
    ("classic", &["works", "co", "group", "house", "craft"]),
    ("playful", &["oo", "ster", "zy", "ie", "ito"]),
    ("professional", &["pro", "hq", "point", "edge", "base"]),
];

pub const STARTUP_POSITIVE: WordList = &[
    "joy", "glow", "thrive", "shine", "bloom", "zest", "vibe", "hope", "bliss", "lucky",
];

pub const STARTUP_ACTIONS: WordList = &[
    "build", "launch", "grow", "boost", "track", "share", "connect", "create", "scale", "learn",
];

pub const STARTUP_ADJECTIVES: WordList = &[
    "smart", "quick", "bright", "bold", "clever", "happy", "fresh", "simple", "pure", "brave",
];

pub const STARTUP_LETTERS: WordList = &["i", "e", "u", "x", "z", "o"];

// Product vocabulary

pub const PRODUCT_CATEGORIES: &[(&str, WordList)] = &[
    ("software", &["code", "script", "logic", "engine", "module", "pixel", "cloud", "data", "sync", "api"]),
    ("hardware", &["volt", "chip", "gear", "circuit", "core", "wire", "motor", "sensor", "dock", "drive"]),
    ("consumer", &["home", "style", "comfort", "daily", "essential", "pure", "glow", "snug", "cozy", "joy"]),
    ("saas", &["suite", "desk", "panel", "console", "portal", "insight", "metric", "board", "workflow", "hub"]),
    ("mobile", &["pocket", "tap", "swipe", "snap", "buzz", "ping", "beam", "go", "mini", "touch"]),
    ("wellness", &["calm", "zen", "breathe", "vital", "balance", "glow", "rest", "bloom", "mend", "aura"]),
    ("home", &["nest", "hearth", "haven", "room", "dwell", "porch", "keep", "cabin", "loft", "den"]),
    ("service", &["assist", "serve", "help", "concierge", "care", "guide", "butler", "tend", "aid", "crew"]),
];

pub const PRODUCT_DEFAULT: WordList = &[
    "one", "smart", "easy", "clear", "swift", "prime", "nova", "pulse", "edge", "spark",
];

pub const PRODUCT_PREFIXES: &[(&str, WordList)] = &[
    ("modern", &["go", "my", "one", "easy", "neo", "snap"]),
    ("tech", &["smart", "auto", "data", "bit", "robo", "omni"]),
    ("classic", &["true", "royal", "grand", "heritage", "golden"]),
    ("playful", &["happy", "tiny", "wiggle", "zip", "pop", "yum"]),
    ("professional", &["pro", "prime", "expert", "core", "total"]),
];

pub const PRODUCT_SUFFIXES: &[(&str, WordList)] = &[
    ("modern", &["ly", "ify", "go", "one", "io"]),
    ("tech", &["bot", "kit", "max", "tron", "ware", "os"]),
    ("classic", &["craft", "works", "mark", "line", "co"]),
    ("playful", &["oo", "zy", "kins", "pop", "ie"]),
    ("professional", &["pro", "plus", "suite", "pad", "box"]),
];

pub const PRODUCT_POSITIVE: WordList = &[
    "delight", "bright", "joy", "ease", "wonder", "glee", "charm", "grace", "zest", "fun",
];

pub const PRODUCT_ACTIONS: WordList = &[
    "make", "fix", "find", "plan", "cook", "clean", "save", "send", "build", "play",
];

pub const PRODUCT_ADJECTIVES: WordList = &[
    "tiny", "mighty", "clever", "handy", "gentle", "sturdy", "lively", "sleek", "cozy", "nimble",
];

pub const PRODUCT_LETTERS: WordList = &["i", "e", "x", "q", "z"];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const BANK: WordBank = WordBank::new(STARTUP_INDUSTRIES, STARTUP_DEFAULT);

    #[test]
    fn test_lookup_is_case_and_punctuation_insensitive() {
        assert_eq!(BANK.lookup_category("E-Commerce"), BANK.lookup_category("ecommerce"));
        assert_eq!(BANK.lookup_category(" TECH "), BANK.lookup_category("tech"));
        assert_eq!(BANK.lookup_category("tech")[0], "code");
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        assert_eq!(BANK.lookup_category("underwater basket weaving"), STARTUP_DEFAULT);
        assert_eq!(BANK.lookup_category(""), STARTUP_DEFAULT);
        assert!(!BANK.contains("nope"));
    }

    #[test]
    fn test_every_table_is_lowercase_and_non_empty() {
        let tables = STARTUP_INDUSTRIES
            .iter()
            .chain(STARTUP_PREFIXES)
            .chain(STARTUP_SUFFIXES)
            .chain(PRODUCT_CATEGORIES)
            .chain(PRODUCT_PREFIXES)
            .chain(PRODUCT_SUFFIXES);

        for (tag, words) in tables {
            assert!(!words.is_empty(), "{} is empty", tag);
            for word in words.iter() {
                assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{} in {}", word, tag);
            }
        }
    }

    #[test]
    fn test_word_pool_keeps_keywords_first_without_repeats() {
        let pool = word_pool(&["Data", "c0de!", "", "DATA"], STARTUP_INDUSTRIES[0].1);
        assert_eq!(&pool[..3], &["data", "cde", "code"]);
        assert_eq!(pool.iter().filter(|w| *w == "data").count(), 1);
    }

    #[test]
    fn test_load_keywords_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# seed list").unwrap();
        writeln!(file, "Rocket").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  orbit  ").unwrap();
        writeln!(file, "123").unwrap();

        let words = load_keywords(file.path()).unwrap();
        assert_eq!(words, vec!["rocket", "orbit"]);
    }

    #[test]
    fn test_load_keywords_missing_file() {
        let err = load_keywords(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, NameForgeError::Io { path: Some(_), .. }));
    }
}
