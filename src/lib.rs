//! Name Forge - brand and product name generation
//!
//! A deterministic pattern engine (word banks, spelling modifiers, scoring and
//! ranking) plus an optional AI pipeline that seeds, extends and re-ranks the
//! engine's output through an LLM.

pub mod config;
pub mod error;
pub mod llm;
pub mod names;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use error::{NameForgeError, Result};
pub use types::{
    CreativeName, CreativeRequest, DomainSuggestion, GenerateOptions, GeneratedName, LlmConfig,
    NameReport, NameStyle, NameWithDomain, PatternType, ProviderKind, RankedName, SeedWords,
};

// Re-export main functionality
pub use llm::{LlmNamingService, NamingService};
pub use names::{generate_names, generate_names_with_domains, suggest_domains, NameEngine};
pub use pipeline::NamePipeline;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
