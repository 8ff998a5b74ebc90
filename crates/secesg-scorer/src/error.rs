use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScorerError {
    /// A cohort with no documents has no defined mean.
    #[error("cohort '{cohort}' has no documents; mean is undefined")]
    EmptyCohort { cohort: String },

    #[error("unknown category '{0}'; expected environmental, social, governance or overall")]
    UnknownCategory(String),

    #[error("invalid keyword pattern '{keyword}': {source}")]
    InvalidPattern {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}
