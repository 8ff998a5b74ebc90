//! Cohort scoring orchestration.

use secesg_core::Document;

use crate::aggregate::{aggregate, compare};
use crate::error::ScorerError;
use crate::scorer::EsgScorer;
use crate::types::{Category, CohortDelta, CohortResult, DocumentScore};

/// Scores and aggregated series for one cohort.
#[derive(Debug, Clone)]
pub struct CohortScores {
    pub label: String,
    /// Per-document scores in input order.
    pub scores: Vec<DocumentScore>,
    pub result: CohortResult,
}

/// Outcome of scoring two cohorts and comparing them.
#[derive(Debug, Clone)]
pub struct ComparisonRun {
    pub baseline: CohortScores,
    pub comparison: CohortScores,
    pub delta: CohortDelta,
}

/// Documents whose cohort year equals `year`, in input order.
#[must_use]
pub fn partition_by_year<'a>(documents: &'a [Document], year: &str) -> Vec<&'a Document> {
    documents.iter().filter(|d| d.year() == year).collect()
}

/// Score every document of one cohort and aggregate the results.
///
/// An empty cohort is returned as-is with a warning; its means stay
/// undefined rather than zero.
#[must_use]
pub fn score_cohort(scorer: &EsgScorer, label: &str, documents: &[&Document]) -> CohortScores {
    let scores: Vec<DocumentScore> = documents.iter().map(|d| scorer.score(d)).collect();
    let result = aggregate(&scores);

    let esg_sentences: usize = scores.iter().map(|s| s.esg_sentences).sum();
    match result.means() {
        Ok(means) => tracing::info!(
            cohort = label,
            documents = scores.len(),
            esg_sentences,
            mean_overall = means.overall,
            "cohort scored"
        ),
        Err(_) => tracing::warn!(cohort = label, "cohort scored with no documents"),
    }

    CohortScores {
        label: label.to_string(),
        scores,
        result,
    }
}

/// Score the baseline and comparison cohorts and compute their delta.
///
/// 1. Partition `documents` by cohort year.
/// 2. Score each cohort.
/// 3. Compare category means (`comparison - baseline`).
///
/// Documents belonging to neither year are ignored.
///
/// # Errors
///
/// Returns [`ScorerError::EmptyCohort`] naming the year if either cohort has
/// no documents.
pub fn run_comparison(
    scorer: &EsgScorer,
    documents: &[Document],
    baseline_year: &str,
    comparison_year: &str,
) -> Result<ComparisonRun, ScorerError> {
    let baseline_docs = partition_by_year(documents, baseline_year);
    let comparison_docs = partition_by_year(documents, comparison_year);

    for (year, docs) in [(baseline_year, &baseline_docs), (comparison_year, &comparison_docs)] {
        if docs.is_empty() {
            tracing::warn!(
                cohort = year,
                total_documents = documents.len(),
                "no documents for cohort; comparison is undefined"
            );
            return Err(ScorerError::EmptyCohort {
                cohort: year.to_string(),
            });
        }
    }

    let ignored = documents
        .len()
        .saturating_sub(baseline_docs.len() + comparison_docs.len());
    if ignored > 0 {
        tracing::debug!(ignored, "documents outside both cohorts skipped");
    }

    let baseline = score_cohort(scorer, baseline_year, &baseline_docs);
    let comparison = score_cohort(scorer, comparison_year, &comparison_docs);
    let delta = compare(&baseline.result, &comparison.result)?;

    tracing::info!(
        baseline = baseline_year,
        comparison = comparison_year,
        overall_delta = delta.overall,
        "cohort comparison complete"
    );

    Ok(ComparisonRun {
        baseline,
        comparison,
        delta,
    })
}
