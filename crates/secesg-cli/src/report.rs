//! `report` command: markdown ESG trend report comparing two cohorts.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use secesg_core::Document;
use secesg_scorer::{run_comparison, Category, ComparisonRun, EsgScorer};

use crate::corpus::{load_topics, Topic};

/// Words shown per theme in the report.
const THEME_WORDS: usize = 5;

/// Topic lists supplied for each cohort. Either side may be absent.
#[derive(Debug, Default)]
pub(crate) struct CohortTopics {
    pub baseline: Option<Vec<Topic>>,
    pub comparison: Option<Vec<Topic>>,
}

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Environmental => "Environmental themes",
        Category::Social => "Social themes",
        Category::Governance => "Governance themes",
        Category::Overall => "Overall ESG focus",
    }
}

fn finding(category: Category, delta: f64) -> String {
    let direction = if delta > 0.0 { "Increased" } else { "Decreased" };
    format!(
        "{}: {direction} by {:.2} mentions per 1000 words",
        category_label(category),
        delta.abs()
    )
}

fn theme_lines(topics: &[Topic]) -> Vec<String> {
    topics
        .iter()
        .map(|t| {
            let words: Vec<&str> = t
                .top_words
                .iter()
                .take(THEME_WORDS)
                .map(String::as_str)
                .collect();
            format!("- Theme {}: {}", t.topic_id + 1, words.join(", "))
        })
        .collect()
}

/// Render the markdown report for a completed comparison.
///
/// # Errors
///
/// Returns an error if either cohort in `run` is empty.
pub(crate) fn render_report(
    run: &ComparisonRun,
    topics: &CohortTopics,
    generated_at: DateTime<Utc>,
) -> anyhow::Result<String> {
    let a = &run.baseline.label;
    let b = &run.comparison.label;
    let baseline_means = run
        .baseline
        .result
        .means()
        .with_context(|| format!("cohort '{a}' is empty"))?;
    let comparison_means = run
        .comparison
        .result
        .means()
        .with_context(|| format!("cohort '{b}' is empty"))?;

    let mut out = vec![
        format!("# Energy Sector ESG Trends Analysis: {a} vs {b}"),
        String::new(),
        format!(
            "**Generated**: {}",
            generated_at.format("%Y-%m-%d %H:%M UTC")
        ),
        format!(
            "**Filings**: {} ({a}), {} ({b})",
            run.baseline.scores.len(),
            run.comparison.scores.len()
        ),
        String::new(),
        format!(
            "This report analyzes ESG (Environmental, Social, and Governance) trends in \
             the energy sector based on SEC filings from {a} and {b}. The analysis examines \
             keyword frequency, sentiment, and thematic shifts in corporate communications."
        ),
        String::new(),
        "## Key Findings".to_string(),
        String::new(),
    ];

    for category in Category::ALL {
        out.push(format!("- {}", finding(category, run.delta.get(category))));
    }

    out.push(String::new());
    out.push("## Keyword Frequency per 1000 Words".to_string());
    out.push(String::new());
    out.push(format!("| Category | {a} | {b} | Change |"));
    out.push("|----------|------|------|--------|".to_string());
    for category in Category::ALL {
        out.push(format!(
            "| {} | {:.2} | {:.2} | {:+.2} |",
            category,
            baseline_means.get(category),
            comparison_means.get(category),
            run.delta.get(category)
        ));
    }

    let sentiment = |scores: &[secesg_scorer::DocumentScore]| {
        let values: Vec<f64> = scores.iter().map(|s| s.avg_sentiment).collect();
        secesg_scorer::mean(&values)
    };
    out.push(String::new());
    out.push(format!(
        "Mean ESG-sentence sentiment: {:.3} ({a}), {:.3} ({b})",
        sentiment(&run.baseline.scores)?,
        sentiment(&run.comparison.scores)?
    ));

    if topics.baseline.is_some() || topics.comparison.is_some() {
        out.push(String::new());
        out.push("## Evolution of Key Themes".to_string());
        for (label, list) in [(a, &topics.baseline), (b, &topics.comparison)] {
            if let Some(list) = list {
                out.push(String::new());
                out.push(format!("{label} Dominant Themes:"));
                out.push(String::new());
                out.extend(theme_lines(list));
            }
        }
    }

    out.push(String::new());
    Ok(out.join("\n"))
}

/// Score both cohorts and write the markdown report to `output` or stdout.
///
/// # Errors
///
/// Returns an error if a cohort is empty, a topic file cannot be loaded, or
/// the output cannot be written.
pub(crate) fn run_report(
    scorer: &EsgScorer,
    documents: &[Document],
    baseline_year: &str,
    comparison_year: &str,
    topic_paths: (Option<&Path>, Option<&Path>),
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let topics = CohortTopics {
        baseline: topic_paths.0.map(load_topics).transpose()?,
        comparison: topic_paths.1.map(load_topics).transpose()?,
    };

    let run = run_comparison(scorer, documents, baseline_year, comparison_year)?;
    let markdown = render_report(&run, &topics, Utc::now())?;

    match output {
        Some(path) => {
            std::fs::write(path, &markdown)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "report written");
            println!("report written to {}", path.display());
        }
        None => println!("{markdown}"),
    }
    Ok(())
}
