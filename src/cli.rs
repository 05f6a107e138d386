//! Command-line arguments and interactive prompts

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use inquire::{Confirm, CustomType, Select, Text};
use name_forge::{
    cli_error,
    names::{profile::ALL_PROFILES, NamingProfile},
    GenerateOptions, NameStyle, PatternType, ProviderKind, Result,
};
use rand::seq::SliceRandom;

const AFTER_HELP: &str = "\
EXAMPLES:
    name-forge data cloud                      # Pattern names from keywords
    name-forge --category finance --domains    # Category words plus domains
    name-forge --ai \"dog walking app\"          # AI-seeded names

ENVIRONMENT VARIABLES:
    OPENAI_API_KEY      OpenAI API key (OPENAI_BASE_URL, OPENAI_MODEL)
    ANTHROPIC_API_KEY   Anthropic API key (ANTHROPIC_MODEL)
    GEMINI_API_KEY      Google Gemini API key (GEMINI_MODEL)
    OLLAMA_MODEL        local Ollama model (OLLAMA_BASE_URL)
    NAME_FORGE_PROVIDER default provider when several are set
    RUST_LOG            log filter (default: warn)";

#[derive(Parser, Debug)]
#[command(name = "name-forge")]
#[command(version, about = "🔥 Name Forge - brand and product name generation", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Keywords to build names from
    #[arg(value_name = "KEYWORDS")]
    keywords: Vec<String>,

    /// Naming profile: startup or product
    #[arg(long, default_value = "startup", value_parser = parse_profile)]
    profile: String,

    /// Industry or product category (see --catalog)
    #[arg(long, alias = "industry", value_name = "TAG")]
    category: Option<String>,

    /// modern, classic, playful, professional or techy
    #[arg(long, value_parser = NameStyle::from_str)]
    style: Option<NameStyle>,

    /// Number of names [default: 20]
    #[arg(long, value_name = "N")]
    count: Option<usize>,

    /// Minimum score 0-100 [default: 50]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Comma-separated patterns, e.g. word-suffix,compound
    #[arg(long, value_name = "LIST", value_delimiter = ',', value_parser = parse_pattern)]
    patterns: Option<Vec<PatternType>>,

    /// Suggest domain names
    #[arg(long)]
    domains: bool,

    /// Extra keywords, one per line
    #[arg(long, value_name = "PATH")]
    words_file: Option<PathBuf>,

    /// Run the AI pipeline for a concept
    #[arg(long, value_name = "CONCEPT", value_parser = parse_concept)]
    ai: Option<String>,

    /// Let the AI re-rank the final list
    #[arg(long, requires = "ai")]
    validate: bool,

    /// openai, anthropic, gemini or ollama
    #[arg(long, requires = "ai", value_parser = ProviderKind::from_str)]
    provider: Option<ProviderKind>,

    /// Print a JSON report
    #[arg(long)]
    json: bool,

    /// List patterns, categories and styles
    #[arg(long)]
    catalog: bool,

    /// Answer prompts instead of passing flags
    #[arg(short, long)]
    interactive: bool,
}

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Catalog,
    Generate(Box<CliArgs>),
}

/// Resolved generation request
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub profile: String,
    pub keywords: Vec<String>,
    pub words_file: Option<PathBuf>,
    pub concept: Option<String>,
    pub provider: Option<ProviderKind>,
    pub json: bool,
    pub options: GenerateOptions,
}

impl CliArgs {
    /// Resolve the requested naming profile
    pub fn naming_profile(&self) -> Result<&'static NamingProfile> {
        NamingProfile::by_name(&self.profile).ok_or_else(|| {
            let known: Vec<&str> = ALL_PROFILES.iter().map(|p| p.name).collect();
            cli_error!("Unknown profile '{}'. Available: {}", self.profile, known.join(", "))
        })
    }
}

impl Cli {
    /// Turn parsed flags into a command, prompting first with `-i`
    pub fn into_command(self) -> Result<Command> {
        if self.catalog {
            return Ok(Command::Catalog);
        }

        let defaults = GenerateOptions::default();
        let mut patterns = Vec::new();
        for kind in self.patterns.unwrap_or(defaults.patterns) {
            if !patterns.contains(&kind) {
                patterns.push(kind);
            }
        }

        let mut cli = CliArgs {
            profile: self.profile,
            keywords: self.keywords,
            words_file: self.words_file,
            concept: self.ai,
            provider: self.provider,
            json: self.json,
            options: GenerateOptions {
                category: self.category.unwrap_or(defaults.category),
                style: self.style.unwrap_or(defaults.style),
                count: self.count.unwrap_or(defaults.count),
                min_score: self.min_score.unwrap_or(defaults.min_score),
                patterns,
                include_domains: self.domains,
                validate: self.validate,
                ..defaults
            },
        };

        if self.interactive {
            prompt_interactive(&mut cli)?;
            if let Some(concept) = &cli.concept {
                parse_concept(concept)?;
            }
        }

        Ok(Command::Generate(Box::new(cli)))
    }
}

/// Concepts used when nothing was given on the command line
pub const SAMPLE_CONCEPTS: &[&str] = &[
    "cloud file sharing for teams",
    "healthy meal planning app",
    "personal finance tracker",
    "online language learning",
    "travel booking assistant",
    "remote team chat",
    "handmade goods marketplace",
    "fitness coaching platform",
];

/// Pick a random sample concept
pub fn random_concept() -> &'static str {
    SAMPLE_CONCEPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("smart productivity tool")
}

fn parse_profile(raw: &str) -> Result<String> {
    NamingProfile::by_name(raw)
        .map(|profile| profile.name.to_string())
        .ok_or_else(|| {
            let known: Vec<&str> = ALL_PROFILES.iter().map(|p| p.name).collect();
            cli_error!("unknown profile, expected one of {}", known.join(", "))
        })
}

/// Only generator patterns are accepted
fn parse_pattern(raw: &str) -> Result<PatternType> {
    let kind: PatternType = raw.parse()?;
    if !PatternType::GENERATED.contains(&kind) {
        return Err(cli_error!("pattern '{}' cannot be generated locally", raw.trim()));
    }
    Ok(kind)
}

fn parse_concept(raw: &str) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(cli_error!("--ai needs a non-empty concept"));
    }
    Ok(raw.to_string())
}

/// Fill in a request through terminal prompts
fn prompt_interactive(cli: &mut CliArgs) -> Result<()> {
    let use_ai = Confirm::new("Use AI to seed and extend the names?")
        .with_default(cli.concept.is_some())
        .prompt()
        .map_err(prompt_error)?;

    let profiles: Vec<&str> = ALL_PROFILES.iter().map(|p| p.name).collect();
    cli.profile = Select::new("Naming profile:", profiles)
        .prompt()
        .map_err(prompt_error)?
        .to_string();

    if use_ai {
        let default_concept = cli
            .concept
            .clone()
            .unwrap_or_else(|| random_concept().to_string());
        let concept = Text::new("Describe your idea:")
            .with_default(&default_concept)
            .prompt()
            .map_err(prompt_error)?;
        cli.concept = Some(concept);
        cli.options.validate = Confirm::new("Let the AI re-rank the final list?")
            .with_default(cli.options.validate)
            .prompt()
            .map_err(prompt_error)?;
    } else {
        decline_ai(cli);
        let keywords = Text::new("Keywords (space or comma separated):")
            .with_default(&cli.keywords.join(" "))
            .prompt()
            .map_err(prompt_error)?;
        cli.keywords = keywords
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
    }

    cli.options.style = Select::new("Style:", NameStyle::ALL.to_vec())
        .prompt()
        .map_err(prompt_error)?;

    cli.options.count = CustomType::<usize>::new("How many names?")
        .with_default(cli.options.count)
        .with_error_message("Please enter a whole number")
        .prompt()
        .map_err(prompt_error)?;

    cli.options.include_domains = Confirm::new("Suggest domains?")
        .with_default(cli.options.include_domains)
        .prompt()
        .map_err(prompt_error)?;

    Ok(())
}

/// Drop every AI-only setting so the run stays pattern-only
fn decline_ai(cli: &mut CliArgs) {
    cli.concept = None;
    cli.provider = None;
    cli.options.validate = false;
}

fn prompt_error(err: inquire::InquireError) -> name_forge::NameForgeError {
    cli_error!("Prompt cancelled: {}", err)
}

/// Keyword pool: positional keywords plus any words file
pub fn collect_keywords(cli: &CliArgs) -> Result<Vec<String>> {
    let mut keywords = cli.keywords.clone();
    if let Some(path) = &cli.words_file {
        keywords.extend(name_forge::names::load_keywords(path)?);
    }
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{error::ErrorKind, CommandFactory};

    fn parse(args: &[&str]) -> std::result::Result<Command, String> {
        let cli = Cli::try_parse_from(std::iter::once("name-forge").chain(args.iter().copied()))
            .map_err(|e| e.to_string())?;
        cli.into_command().map_err(|e| e.to_string())
    }

    fn generate(args: &[&str]) -> CliArgs {
        match parse(args).unwrap() {
            Command::Generate(cli) => *cli,
            other => panic!("expected generate, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = generate(&[]);
        assert_eq!(cli.profile, "startup");
        assert_eq!(cli.options, GenerateOptions::default());
        assert!(cli.concept.is_none());
    }

    #[test]
    fn test_flags_and_keywords() {
        let cli = generate(&[
            "data",
            "--profile",
            "Product",
            "--count=5",
            "--min-score",
            "0",
            "--style",
            "techy",
            "--patterns",
            "word-suffix, compound,word-suffix",
            "cloud",
            "--domains",
            "--json",
        ]);
        assert_eq!(cli.keywords, vec!["data", "cloud"]);
        assert_eq!(cli.profile, "product");
        assert_eq!(cli.options.count, 5);
        assert_eq!(cli.options.min_score, 0);
        assert_eq!(cli.options.style, NameStyle::Techy);
        assert_eq!(
            cli.options.patterns,
            vec![PatternType::WordSuffix, PatternType::Compound]
        );
        assert!(cli.options.include_domains);
        assert!(cli.json);
    }

    #[test]
    fn test_industry_alias() {
        let cli = generate(&["--industry", "finance"]);
        assert_eq!(cli.options.category, "finance");
    }

    #[test]
    fn test_ai_flags() {
        let cli = generate(&["--ai", "dog walking", "--validate", "--provider", "claude"]);
        assert_eq!(cli.concept.as_deref(), Some("dog walking"));
        assert!(cli.options.validate);
        assert_eq!(cli.provider, Some(ProviderKind::Anthropic));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse(&["--catalog"]).unwrap(), Command::Catalog);

        let help = Cli::try_parse_from(["name-forge", "data", "-h"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        let version = Cli::try_parse_from(["name-forge", "-V"]).unwrap_err();
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--count"]).is_err());
        assert!(parse(&["--count", "many"]).is_err());
        assert!(parse(&["--min-score", "101"]).is_err());
        assert!(parse(&["--profile", "band"]).is_err());
        assert!(parse(&["--style", "gothic"]).unwrap_err().contains("gothic"));
        assert!(parse(&["--patterns", "invented"]).is_err());
        assert!(parse(&["--validate"]).is_err());
        assert!(parse(&["--provider", "openai"]).is_err());
        assert!(parse(&["--ai", "  "]).is_err());
    }

    #[test]
    fn test_declining_ai_clears_ai_settings() {
        let mut cli = generate(&["--ai", "dog walking", "--validate", "--provider", "openai"]);
        decline_ai(&mut cli);
        assert_eq!(cli.concept, None);
        assert_eq!(cli.provider, None);
        assert!(!cli.options.validate);
    }

    #[test]
    fn test_random_concept_is_a_sample() {
        assert!(SAMPLE_CONCEPTS.contains(&random_concept()));
    }
}
