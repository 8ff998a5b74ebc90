//! `compare` command: cohort means and deltas as a plain-text table.

use anyhow::Context;
use secesg_core::Document;
use secesg_scorer::{run_comparison, Category, ComparisonRun, EsgScorer};

/// Format cohort means and deltas, one row per category.
///
/// # Errors
///
/// Returns an error if either cohort in `run` is empty.
pub(crate) fn format_comparison_table(run: &ComparisonRun) -> anyhow::Result<String> {
    let baseline = run
        .baseline
        .result
        .means()
        .with_context(|| format!("cohort '{}' is empty", run.baseline.label))?;
    let comparison = run
        .comparison
        .result
        .means()
        .with_context(|| format!("cohort '{}' is empty", run.comparison.label))?;

    let mut lines = vec![
        format!(
            "{:<16}{:>12}{:>12}{:>12}",
            "CATEGORY", run.baseline.label, run.comparison.label, "DELTA"
        ),
    ];
    for category in Category::ALL {
        lines.push(format!(
            "{:<16}{:>12.2}{:>12.2}{:>+12.2}",
            category.to_string(),
            baseline.get(category),
            comparison.get(category),
            run.delta.get(category)
        ));
    }
    lines.push(format!(
        "documents: {} ({}) / {} ({}); values are mentions per 1000 words",
        run.baseline.scores.len(),
        run.baseline.label,
        run.comparison.scores.len(),
        run.comparison.label
    ));
    Ok(lines.join("\n"))
}

/// Score both cohorts and print their comparison table.
///
/// # Errors
///
/// Returns an error if either cohort has no documents.
pub(crate) fn run_compare(
    scorer: &EsgScorer,
    documents: &[Document],
    baseline_year: &str,
    comparison_year: &str,
) -> anyhow::Result<()> {
    let run = run_comparison(scorer, documents, baseline_year, comparison_year)?;
    println!("{}", format_comparison_table(&run)?);
    Ok(())
}
