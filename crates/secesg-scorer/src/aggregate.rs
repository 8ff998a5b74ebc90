//! Cohort aggregation and comparison.

use crate::error::ScorerError;
use crate::types::{Category, CategoryValues, CohortDelta, CohortResult, DocumentScore};

/// Collect normalized scores into one sequence per category, preserving
/// document order. No deduplication or outlier removal.
#[must_use]
pub fn aggregate(scores: &[DocumentScore]) -> CohortResult {
    let mut result = CohortResult::with_capacity(scores.len());
    for score in scores {
        result.push(score);
    }
    result
}

/// Arithmetic mean of `values`.
///
/// # Errors
///
/// Returns [`ScorerError::EmptyCohort`] when `values` is empty; an empty
/// sequence has no mean and is never reported as zero.
pub fn mean(values: &[f64]) -> Result<f64, ScorerError> {
    labelled_mean(values, UNLABELLED)
}

/// Cohort name used when the caller did not supply one.
pub(crate) const UNLABELLED: &str = "unlabelled";

pub(crate) fn labelled_mean(values: &[f64], cohort: &str) -> Result<f64, ScorerError> {
    if values.is_empty() {
        return Err(ScorerError::EmptyCohort {
            cohort: cohort.to_string(),
        });
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = values.len() as f64;
    Ok(values.iter().sum::<f64>() / denom)
}

/// Per-category `mean(comparison) - mean(baseline)`.
///
/// # Errors
///
/// Returns [`ScorerError::EmptyCohort`] if either cohort has no documents.
/// An empty cohort is never treated as a mean of zero.
pub fn compare(baseline: &CohortResult, comparison: &CohortResult) -> Result<CohortDelta, ScorerError> {
    let delta = |category: Category| -> Result<f64, ScorerError> {
        let a = labelled_mean(baseline.series(category), "baseline")?;
        let b = labelled_mean(comparison.series(category), "comparison")?;
        Ok(b - a)
    };

    Ok(CategoryValues {
        environmental: delta(Category::Environmental)?,
        social: delta(Category::Social)?,
        governance: delta(Category::Governance)?,
        overall: delta(Category::Overall)?,
    })
}
