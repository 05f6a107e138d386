//! Name generation engine
//!
//! Word banks and spelling modifiers feed a set of pattern generators; every
//! candidate is scored by a deterministic heuristic, then merged, deduplicated
//! and ranked. All of it is synchronous and pure.

pub mod domains;
pub mod engine;
pub mod modifiers;
pub mod patterns;
pub mod profile;
pub mod ranking;
pub mod scoring;
pub mod words;

pub use domains::suggest_domains;
pub use engine::{generate_names, generate_names_with_domains, NameEngine};
pub use modifiers::{Modification, Modifier, MODIFIERS};
pub use patterns::{Pattern, PATTERNS};
pub use profile::{NamingProfile, PRODUCT, STARTUP};
pub use scoring::{score, ScoringRules};
pub use words::{load_keywords, WordBank};
