//! Loading the processed-filing corpus and topic files from disk.

use std::path::Path;

use anyhow::Context;
use secesg_core::Document;
use serde::Deserialize;

/// One topic as emitted by the external topic-modeling step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Topic {
    pub topic_id: usize,
    pub top_words: Vec<String>,
}

/// Read the corpus JSON array from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array.
pub(crate) fn load_corpus(path: &Path) -> anyhow::Result<Vec<Document>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus {}", path.display()))?;
    let documents =
        parse_corpus(&raw).with_context(|| format!("failed to parse corpus {}", path.display()))?;
    tracing::info!(path = %path.display(), documents = documents.len(), "corpus loaded");
    Ok(documents)
}

/// Parse a corpus JSON array, skipping entries that are not document objects.
///
/// One malformed filing never fails the batch; it is logged and dropped.
///
/// # Errors
///
/// Returns an error if `raw` is not a JSON array.
pub(crate) fn parse_corpus(raw: &str) -> anyhow::Result<Vec<Document>> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(raw).context("corpus must be a JSON array of documents")?;

    let mut documents = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Document>(entry) {
            Ok(document) => documents.push(document),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed corpus entry");
            }
        }
    }
    Ok(documents)
}

/// Read a topic list from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) fn load_topics(path: &Path) -> anyhow::Result<Vec<Topic>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read topics {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse topics {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_documents_in_order() {
        let raw = r#"[
            {"content": "carbon", "metadata": {"ticker": "XOM", "filing_type": "10-K", "date": "2020-02-26", "year": "2020"}},
            {"content": "audit", "metadata": {"ticker": "CVX", "filing_type": "10-K", "date": "2024-02-23", "year": "2024"}}
        ]"#;
        let docs = parse_corpus(raw).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].metadata.ticker, "XOM");
        assert_eq!(docs[1].year(), "2024");
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let raw = r#"[
            {"content": "carbon", "metadata": {"date": "2020-01-01"}},
            "not a document",
            {"content": 42},
            {"content": null, "metadata": {"date": "2024-01-01"}}
        ]"#;
        let docs = parse_corpus(raw).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].content, "");
    }

    #[test]
    fn non_array_corpus_is_an_error() {
        assert!(parse_corpus(r#"{"content": "x"}"#).is_err());
        assert!(parse_corpus("not json").is_err());
    }

    #[test]
    fn empty_array_is_empty_corpus() {
        assert!(parse_corpus("[]").unwrap().is_empty());
    }

    #[test]
    fn topic_contract_deserializes() {
        let topics: Vec<Topic> =
            serde_json::from_str(r#"[{"topic_id": 0, "top_words": ["oil", "gas"]}]"#).unwrap();
        assert_eq!(topics[0].topic_id, 0);
        assert_eq!(topics[0].top_words, vec!["oil", "gas"]);
    }

    #[test]
    fn missing_corpus_file_reports_path() {
        let err = load_corpus(Path::new("/nonexistent/all_processed_docs.json")).unwrap_err();
        assert!(format!("{err:#}").contains("all_processed_docs.json"));
    }
}
