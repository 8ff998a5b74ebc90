//! ESG scoring pipeline for SEC filings.
//!
//! Counts environmental, social and governance keywords per filing, normalizes
//! them to mentions per 1000 words, scores the sentiment of ESG-relevant
//! sentences with a rule-based lexicon, and aggregates the per-filing densities
//! into cohorts that can be compared year over year.

pub mod aggregate;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod segment;
pub mod sentiment;
pub mod types;

mod matcher;

pub use aggregate::{aggregate, compare, mean};
pub use error::ScorerError;
pub use pipeline::{partition_by_year, run_comparison, score_cohort, CohortScores, ComparisonRun};
pub use scorer::{EsgScorer, EsgScorerBuilder};
pub use segment::{PunctuationSegmenter, Segmenter};
pub use sentiment::{LexiconSentiment, SentimentScorer};
pub use types::{Category, CategoryMeans, CategoryValues, CohortDelta, CohortResult, DocumentScore};
