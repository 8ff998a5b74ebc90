//! Parsed filing records as produced by the ingestion step.

use serde::{Deserialize, Deserializer, Serialize};

/// Identifying metadata for one filing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ticker: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filing_type: String,
    /// Filing date as `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// Cohort key. Derived from `date` when absent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: String,
}

impl DocumentMetadata {
    #[must_use]
    pub fn new(ticker: &str, filing_type: &str, date: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            filing_type: filing_type.to_string(),
            date: date.to_string(),
            year: year_from_date(date),
        }
    }

    /// Year used for cohort partitioning, falling back to the `date` prefix.
    #[must_use]
    pub fn cohort_year(&self) -> String {
        if self.year.trim().is_empty() {
            year_from_date(&self.date)
        } else {
            self.year.trim().to_string()
        }
    }
}

/// A parsed filing. Content is free text; missing content is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: DocumentMetadata,
}

impl Document {
    #[must_use]
    pub fn new(metadata: DocumentMetadata, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    #[must_use]
    pub fn year(&self) -> String {
        self.metadata.cohort_year()
    }
}

fn year_from_date(date: &str) -> String {
    date.trim().split('-').next().unwrap_or_default().to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_metadata_derives_year_from_date() {
        let meta = DocumentMetadata::new("XOM", "10-K", "2024-02-28");
        assert_eq!(meta.year, "2024");
    }

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "content": "Net zero by 2050.",
            "metadata": {"ticker": "CVX", "filing_type": "10-K", "date": "2020-02-21", "year": "2020"}
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.content, "Net zero by 2050.");
        assert_eq!(doc.metadata.ticker, "CVX");
        assert_eq!(doc.year(), "2020");
    }

    #[test]
    fn null_content_becomes_empty_string() {
        let json = r#"{"content": null, "metadata": {"ticker": "BP", "date": "2024-01-05"}}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.content, "");
        assert_eq!(doc.metadata.filing_type, "");
    }

    #[test]
    fn missing_content_and_metadata_are_tolerated() {
        let doc: Document = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, Document::default());
        assert_eq!(doc.year(), "");
    }

    #[test]
    fn null_metadata_becomes_default() {
        let doc: Document = serde_json::from_str(r#"{"content": "x", "metadata": null}"#).unwrap();
        assert_eq!(doc.metadata, DocumentMetadata::default());
    }

    #[test]
    fn missing_year_falls_back_to_date_prefix() {
        let json = r#"{"content": "x", "metadata": {"date": "2020-11-03"}}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.year(), "2020");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let json = r#"{"content": "x", "sections": [], "metadata": {"year": "2024", "cik": 1}}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.year(), "2024");
    }
}
