//! `score` command: per-document ESG scores as JSON.

use std::path::Path;

use anyhow::Context;
use secesg_core::Document;
use secesg_scorer::{DocumentScore, EsgScorer};

/// Score documents, optionally restricted to one cohort year.
pub(crate) fn score_documents(
    scorer: &EsgScorer,
    documents: &[Document],
    year: Option<&str>,
) -> Vec<DocumentScore> {
    documents
        .iter()
        .filter(|d| year.is_none_or(|y| d.year() == y))
        .map(|d| scorer.score(d))
        .collect()
}

/// Write per-document scores as pretty JSON to `output`, or stdout when unset.
///
/// # Errors
///
/// Returns an error if serialization or writing the output file fails.
pub(crate) fn run_score(
    scorer: &EsgScorer,
    documents: &[Document],
    year: Option<&str>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let scores = score_documents(scorer, documents, year);
    if scores.is_empty() {
        tracing::warn!(
            year = year.unwrap_or("all"),
            "no documents matched; writing empty score list"
        );
    }

    let json = serde_json::to_string_pretty(&scores).context("failed to serialize scores")?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write scores to {}", path.display()))?;
            println!("wrote {} document scores to {}", scores.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use secesg_core::DocumentMetadata;

    use super::*;

    fn docs() -> Vec<Document> {
        vec![
            Document::new(DocumentMetadata::new("XOM", "10-K", "2020-02-26"), "carbon"),
            Document::new(DocumentMetadata::new("CVX", "10-K", "2024-02-23"), "audit audit"),
        ]
    }

    #[test]
    fn scores_every_document_without_year_filter() {
        let scores = score_documents(&EsgScorer::default(), &docs(), None);
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[1].g_count, 2);
    }

    #[test]
    fn year_filter_restricts_documents() {
        let scores = score_documents(&EsgScorer::default(), &docs(), Some("2024"));
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].ticker, "CVX");
    }

    #[test]
    fn unmatched_year_yields_empty_list() {
        assert!(score_documents(&EsgScorer::default(), &docs(), Some("1999")).is_empty());
    }
}
