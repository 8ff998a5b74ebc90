use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How configured keywords are located inside lowercased document text.
///
/// `Substring` counts literal occurrences anywhere, so `"green"` also matches
/// inside `"greenfield"`. `WordBoundary` only counts occurrences delimited by
/// non-word characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    #[default]
    Substring,
    WordBoundary,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::WordBoundary => write!(f, "word_boundary"),
        }
    }
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "substring" => Ok(MatchMode::Substring),
            "word_boundary" => Ok(MatchMode::WordBoundary),
            other => Err(format!(
                "unknown match mode '{other}'; expected 'substring' or 'word_boundary'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON array of processed filings produced by the ingestion step.
    pub corpus_path: PathBuf,
    /// Optional YAML keyword set; the built-in list is used when unset.
    pub keywords_path: Option<PathBuf>,
    pub baseline_year: String,
    pub comparison_year: String,
    pub match_mode: MatchMode,
}
