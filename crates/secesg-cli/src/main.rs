mod compare;
mod corpus;
mod report;
mod score;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use secesg_core::{AppConfig, KeywordSet, MatchMode};
use secesg_scorer::EsgScorer;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "secesg")]
#[command(about = "ESG keyword and sentiment trends in SEC filings")]
struct Cli {
    /// Processed corpus JSON (defaults to SECESG_CORPUS_PATH)
    #[arg(long, global = true)]
    corpus: Option<PathBuf>,

    /// YAML keyword set (defaults to SECESG_KEYWORDS_PATH, then the built-in list)
    #[arg(long, global = true)]
    keywords: Option<PathBuf>,

    /// Keyword matching: `substring` or `word-boundary`
    #[arg(long, global = true)]
    match_mode: Option<MatchMode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score every filing and emit per-document results as JSON
    Score {
        /// Restrict to filings from one year
        #[arg(long, value_parser = secesg_core::parse_year)]
        year: Option<String>,

        /// Write JSON to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Compare mean keyword density between two cohort years
    Compare {
        /// Baseline cohort year (defaults to SECESG_BASELINE_YEAR)
        #[arg(long, value_parser = secesg_core::parse_year)]
        baseline: Option<String>,

        /// Comparison cohort year (defaults to SECESG_COMPARISON_YEAR)
        #[arg(long, value_parser = secesg_core::parse_year)]
        comparison: Option<String>,
    },
    /// Generate a markdown ESG trend report
    Report {
        #[arg(long, value_parser = secesg_core::parse_year)]
        baseline: Option<String>,

        #[arg(long, value_parser = secesg_core::parse_year)]
        comparison: Option<String>,

        /// Topic JSON for the baseline cohort
        #[arg(long)]
        baseline_topics: Option<PathBuf>,

        /// Topic JSON for the comparison cohort
        #[arg(long)]
        comparison_topics: Option<PathBuf>,

        /// Write markdown to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

/// Config values supplied on the command line, keyed by the env var they
/// replace.
fn config_overrides(cli: &Cli) -> HashMap<&'static str, String> {
    let mut overrides = HashMap::new();
    if let Some(path) = &cli.corpus {
        overrides.insert("SECESG_CORPUS_PATH", path.to_string_lossy().into_owned());
    }
    if let Some(path) = &cli.keywords {
        overrides.insert("SECESG_KEYWORDS_PATH", path.to_string_lossy().into_owned());
    }
    if let Some(mode) = cli.match_mode {
        overrides.insert("SECESG_MATCH_MODE", mode.to_string());
    }
    if let Some(
        Commands::Compare {
            baseline,
            comparison,
        }
        | Commands::Report {
            baseline,
            comparison,
            ..
        },
    ) = &cli.command
    {
        if let Some(year) = baseline {
            overrides.insert("SECESG_BASELINE_YEAR", year.clone());
        }
        if let Some(year) = comparison {
            overrides.insert("SECESG_COMPARISON_YEAR", year.clone());
        }
    }
    overrides
}

fn build_scorer(config: &AppConfig) -> anyhow::Result<EsgScorer> {
    let keywords = match &config.keywords_path {
        Some(path) => secesg_core::load_keywords(path)
            .with_context(|| format!("failed to load keywords from {}", path.display()))?,
        None => KeywordSet::default(),
    };
    let match_mode = config.match_mode;
    tracing::debug!(%match_mode, keywords = keywords.all().count(), "scorer configured");

    Ok(EsgScorer::builder(keywords).match_mode(match_mode).build()?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = secesg_core::load_app_config(&config_overrides(&cli))?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command.as_ref() else {
        println!("secesg: choose a subcommand (score, compare, report); see --help");
        return Ok(());
    };

    let scorer = build_scorer(&config)?;
    let documents = corpus::load_corpus(&config.corpus_path)?;

    match command {
        Commands::Score { year, output } => {
            score::run_score(&scorer, &documents, year.as_deref(), output.as_deref())
        }
        Commands::Compare { .. } => compare::run_compare(
            &scorer,
            &documents,
            &config.baseline_year,
            &config.comparison_year,
        ),
        Commands::Report {
            baseline_topics,
            comparison_topics,
            output,
            ..
        } => report::run_report(
            &scorer,
            &documents,
            &config.baseline_year,
            &config.comparison_year,
            (baseline_topics.as_deref(), comparison_topics.as_deref()),
            output.as_deref(),
        ),
    }
}
