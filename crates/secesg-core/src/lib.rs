//! Shared domain types and configuration for the SEC filing ESG analysis tools.

pub mod app_config;
pub mod config;
pub mod document;
pub mod keywords;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, MatchMode};
pub use config::{build_app_config, load_app_config, parse_year, with_overrides};
pub use document::{Document, DocumentMetadata};
pub use keywords::{load_keywords, KeywordCategory, KeywordSet};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read keywords file {path}: {source}")]
    KeywordsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse keywords file: {0}")]
    KeywordsFileParse(#[from] serde_yaml::Error),

    #[error("keyword validation failed: {0}")]
    Validation(String),
}
