//! Name Forge - brand and product name generation
//!
//! Pattern-based name generation by default; `--ai` runs the LLM-assisted
//! pipeline on a concept.

mod cli;

use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, CliArgs, Command};
use indicatif::{ProgressBar, ProgressStyle};
use name_forge::{
    config,
    names::{patterns::PATTERNS, profile::ALL_PROFILES, NameEngine},
    NameForgeError, NamePipeline, NameReport, NameStyle, NameWithDomain,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    name_forge::init().context("Failed to initialize")?;
    init_logging();
    tracing::debug!(version = name_forge::VERSION, "Starting name-forge");

    let command = match Cli::parse().into_command() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    let result = match command {
        Command::Catalog => {
            print_catalog();
            Ok(())
        }
        Command::Generate(args) => run_name_forge(&args).await,
    };

    if let Err(e) = result {
        match e.downcast_ref::<NameForgeError>() {
            Some(err) => {
                eprintln!("{}", err.user_message());
                if err.is_collaborator_failure() {
                    eprintln!("💡 Leave out --ai to generate pattern-only names offline");
                }
            }
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so `--json` output stays clean
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main generation workflow
async fn run_name_forge(args: &CliArgs) -> anyhow::Result<()> {
    let profile = args.naming_profile()?;
    let engine = NameEngine::new(profile);

    let mut options = args.options.clone();
    options.keywords = cli::collect_keywords(args)?;

    let (concept, names) = match &args.concept {
        Some(concept) => {
            let names = run_pipeline(engine, concept, &options, args).await?;
            (Some(concept.clone()), names)
        }
        None => {
            let mut concept = None;
            if options.keywords.is_empty() {
                let sample = cli::random_concept();
                if !args.json {
                    println!("🎲 No keywords given, using a sample idea: \"{}\"", sample);
                }
                options.keywords = sample
                    .split_whitespace()
                    .filter(|w| w.len() > 3)
                    .map(str::to_string)
                    .collect();
                concept = Some(sample.to_string());
            }
            (concept, generate_local(engine, &options))
        }
    };

    if args.json {
        let report = NameReport::new(profile.name, concept, names);
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
        return Ok(());
    }

    if names.is_empty() {
        println!("😔 No names passed the score threshold. Try a lower --min-score or more keywords.");
        return Ok(());
    }

    display_names(&names, options.style);
    Ok(())
}

/// Pattern-only path; domain lists stay empty unless requested
fn generate_local(engine: NameEngine, options: &name_forge::GenerateOptions) -> Vec<NameWithDomain> {
    if options.include_domains {
        engine.generate_names_with_domains(options)
    } else {
        engine
            .generate_names(options)
            .into_iter()
            .map(|name| NameWithDomain { name, domains: Vec::new() })
            .collect()
    }
}

/// AI pipeline with a spinner while the collaborator works
async fn run_pipeline(
    engine: NameEngine,
    concept: &str,
    options: &name_forge::GenerateOptions,
    args: &CliArgs,
) -> anyhow::Result<Vec<NameWithDomain>> {
    let preferred = match args.provider {
        Some(kind) => Some(kind),
        None => config::preferred_provider_from_env()?,
    };
    let service = config::build_service(&config::providers_from_env(), preferred)?;
    if let Some(kind) = service.default_provider() {
        tracing::info!(provider = %kind, "Using LLM provider");
    }

    let spinner = if args.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message(format!("🤖 Forging names for \"{}\"...", concept));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let pipeline = NamePipeline::with_engine(engine, Arc::new(service.clone()));
    let result = pipeline.generate_startup_names(concept, options).await;
    spinner.finish_and_clear();

    let metrics = service.metrics();
    tracing::info!(
        api_calls = metrics.api_calls,
        errors = metrics.errors,
        avg_latency_ms = metrics.avg_latency_ms(),
        "AI pipeline finished"
    );

    Ok(result?)
}

/// Display names as a ranked table
fn display_names(names: &[NameWithDomain], style: NameStyle) {
    println!();
    println!("🎨 Generated Names ({}, {} style):", names.len(), style);
    println!("═══════════════════════════════════");

    for (i, entry) in names.iter().enumerate() {
        let name = &entry.name;
        println!("{:3}. {:<20} {:>3}  {}", i + 1, name.name, name.score, name.pattern);

        if let Some(reasoning) = &name.reasoning {
            println!("     💬 {}", reasoning);
        }

        let likely: Vec<&str> = entry
            .domains
            .iter()
            .filter(|d| d.likely_available)
            .map(|d| d.domain.as_str())
            .collect();
        if !likely.is_empty() {
            println!("     🌐 {}", likely.join("  "));
        }
    }
    println!();
}

/// List patterns, profiles and their categories
fn print_catalog() {
    println!("🧩 Patterns");
    println!("═══════════");
    for pattern in PATTERNS {
        println!(
            "  {:<18} {} (e.g. {})",
            pattern.kind.as_str(),
            pattern.description,
            pattern.examples.join(", ")
        );
    }
    println!();

    for profile in ALL_PROFILES {
        println!("📚 Profile: {}", profile.name);
        let tags: Vec<&str> = profile.categories.tags().collect();
        println!("  categories: {}", tags.join(", "));
    }
    println!();

    let styles: Vec<String> = NameStyle::ALL.iter().map(|s| s.to_string()).collect();
    println!("🎭 Styles: {}", styles.join(", "));
}
