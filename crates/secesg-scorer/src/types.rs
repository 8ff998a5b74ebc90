use serde::{Deserialize, Serialize};

use secesg_core::KeywordCategory;

use crate::error::ScorerError;

/// The closed set of aggregate categories: the three keyword categories plus
/// their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Environmental,
    Social,
    Governance,
    Overall,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Environmental,
        Category::Social,
        Category::Governance,
        Category::Overall,
    ];
}

impl From<KeywordCategory> for Category {
    fn from(value: KeywordCategory) -> Self {
        match value {
            KeywordCategory::Environmental => Category::Environmental,
            KeywordCategory::Social => Category::Social,
            KeywordCategory::Governance => Category::Governance,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Environmental => write!(f, "environmental"),
            Category::Social => write!(f, "social"),
            Category::Governance => write!(f, "governance"),
            Category::Overall => write!(f, "overall"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ScorerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "environmental" => Ok(Category::Environmental),
            "social" => Ok(Category::Social),
            "governance" => Ok(Category::Governance),
            "overall" => Ok(Category::Overall),
            _ => Err(ScorerError::UnknownCategory(s.to_string())),
        }
    }
}

/// Scoring output for one filing. Created once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentScore {
    pub ticker: String,
    pub filing_type: String,
    pub date: String,
    pub year: String,
    pub e_count: usize,
    /// Environmental mentions per 1000 words.
    pub e_normalized: f64,
    pub s_count: usize,
    pub s_normalized: f64,
    pub g_count: usize,
    pub g_normalized: f64,
    /// Always `e_count + s_count + g_count`.
    pub overall_count: usize,
    pub overall_normalized: f64,
    /// Whitespace-delimited tokens in the original content.
    pub word_count: usize,
    /// Number of segments containing at least one keyword.
    pub esg_sentences: usize,
    /// Mean compound sentiment over ESG-relevant segments. 0.0 if none.
    pub avg_sentiment: f64,
}

impl DocumentScore {
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Environmental => self.e_count,
            Category::Social => self.s_count,
            Category::Governance => self.g_count,
            Category::Overall => self.overall_count,
        }
    }

    #[must_use]
    pub fn normalized(&self, category: Category) -> f64 {
        match category {
            Category::Environmental => self.e_normalized,
            Category::Social => self.s_normalized,
            Category::Governance => self.g_normalized,
            Category::Overall => self.overall_normalized,
        }
    }
}

/// Normalized scores of every document in a cohort, one sequence per
/// category, in document order.
///
/// Built only through [`crate::aggregate`], so all four series always have
/// the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CohortResult {
    environmental: Vec<f64>,
    social: Vec<f64>,
    governance: Vec<f64>,
    overall: Vec<f64>,
}

impl CohortResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            environmental: Vec::with_capacity(capacity),
            social: Vec::with_capacity(capacity),
            governance: Vec::with_capacity(capacity),
            overall: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, score: &DocumentScore) {
        self.environmental.push(score.e_normalized);
        self.social.push(score.s_normalized);
        self.governance.push(score.g_normalized);
        self.overall.push(score.overall_normalized);
    }

    #[must_use]
    pub fn series(&self, category: Category) -> &[f64] {
        match category {
            Category::Environmental => &self.environmental,
            Category::Social => &self.social,
            Category::Governance => &self.governance,
            Category::Overall => &self.overall,
        }
    }

    /// Look up a series by category name.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerError::UnknownCategory`] for names outside the four
    /// fixed categories.
    pub fn get(&self, name: &str) -> Result<&[f64], ScorerError> {
        let category: Category = name.parse()?;
        Ok(self.series(category))
    }

    /// Number of documents in the cohort.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overall.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overall.is_empty()
    }

    /// Per-category means.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerError::EmptyCohort`] for a cohort with no documents.
    pub fn means(&self) -> Result<CategoryMeans, ScorerError> {
        Ok(CategoryValues {
            environmental: crate::aggregate::mean(&self.environmental)?,
            social: crate::aggregate::mean(&self.social)?,
            governance: crate::aggregate::mean(&self.governance)?,
            overall: crate::aggregate::mean(&self.overall)?,
        })
    }
}

/// One scalar per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryValues {
    pub environmental: f64,
    pub social: f64,
    pub governance: f64,
    pub overall: f64,
}

impl CategoryValues {
    #[must_use]
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Environmental => self.environmental,
            Category::Social => self.social,
            Category::Governance => self.governance,
            Category::Overall => self.overall,
        }
    }
}

/// Mean normalized score per category for one cohort.
pub type CategoryMeans = CategoryValues;

/// `mean(later) - mean(earlier)` per category.
pub type CohortDelta = CategoryValues;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> CohortResult {
        CohortResult {
            environmental: vec![1.0, 3.0],
            social: vec![2.0, 2.0],
            governance: vec![0.0, 4.0],
            overall: vec![3.0, 9.0],
        }
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Overall".parse::<Category>().unwrap(), Category::Overall);
        assert_eq!(
            " governance ".parse::<Category>().unwrap(),
            Category::Governance
        );
    }

    #[test]
    fn category_display_round_trips_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn get_unknown_category_is_lookup_error() {
        let result = sample_result();
        let err = result.get("economic").unwrap_err();
        assert!(
            matches!(err, ScorerError::UnknownCategory(ref name) if name == "economic"),
            "expected UnknownCategory, got: {err:?}"
        );
    }

    #[test]
    fn get_known_category_returns_series() {
        let result = sample_result();
        assert_eq!(result.get("social").unwrap(), &[2.0, 2.0]);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn means_of_populated_cohort() {
        let means = sample_result().means().unwrap();
        assert!((means.environmental - 2.0).abs() < f64::EPSILON);
        assert!((means.governance - 2.0).abs() < f64::EPSILON);
        assert!((means.get(Category::Overall) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn means_of_empty_cohort_is_error() {
        let err = CohortResult::default().means().unwrap_err();
        assert!(
            matches!(err, ScorerError::EmptyCohort { .. }),
            "expected EmptyCohort, got: {err:?}"
        );
    }

    #[test]
    fn document_score_serializes_with_flat_field_names() {
        let score = DocumentScore {
            ticker: "XOM".to_string(),
            filing_type: "10-K".to_string(),
            date: "2024-02-28".to_string(),
            year: "2024".to_string(),
            e_count: 1,
            e_normalized: 10.0,
            s_count: 0,
            s_normalized: 0.0,
            g_count: 0,
            g_normalized: 0.0,
            overall_count: 1,
            overall_normalized: 10.0,
            word_count: 100,
            esg_sentences: 1,
            avg_sentiment: 0.5,
        };
        let value = serde_json::to_value(&score).unwrap();
        assert_eq!(value["e_count"], 1);
        assert_eq!(value["overall_normalized"], 10.0);
        assert_eq!(value["esg_sentences"], 1);
        assert_eq!(value["avg_sentiment"], 0.5);
    }
}
