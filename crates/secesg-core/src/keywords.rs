use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// The three keyword-bearing ESG categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Environmental,
    Social,
    Governance,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 3] = [
        KeywordCategory::Environmental,
        KeywordCategory::Social,
        KeywordCategory::Governance,
    ];
}

impl std::fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordCategory::Environmental => write!(f, "environmental"),
            KeywordCategory::Social => write!(f, "social"),
            KeywordCategory::Governance => write!(f, "governance"),
        }
    }
}

const ENVIRONMENTAL: &[&str] = &[
    "climate change",
    "carbon",
    "emissions",
    "greenhouse gas",
    "ghg",
    "renewable",
    "sustainability",
    "sustainable",
    "green",
    "environmental",
    "energy efficiency",
    "carbon neutral",
    "net zero",
    "pollution",
    "clean energy",
    "solar",
    "wind power",
];

const SOCIAL: &[&str] = &[
    "diversity",
    "inclusion",
    "equity",
    "dei",
    "community",
    "human rights",
    "labor",
    "health and safety",
    "employee",
    "social responsibility",
    "gender",
    "racial",
    "indigenous",
    "stakeholder",
    "supply chain",
    "customer safety",
];

const GOVERNANCE: &[&str] = &[
    "board diversity",
    "executive compensation",
    "ethics",
    "compliance",
    "transparency",
    "accountability",
    "risk management",
    "audit",
    "shareholder",
    "corporate governance",
    "bribery",
    "corruption",
    "whistleblower",
    "disclosure",
    "voting rights",
];

/// Ordered lowercase keyword lists per category.
///
/// Order is preserved from the source configuration; duplicates across
/// categories are allowed (`"board diversity"` and `"diversity"` both count).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub environmental: Vec<String>,
    pub social: Vec<String>,
    pub governance: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| (*s).to_string()).collect();
        Self {
            environmental: owned(ENVIRONMENTAL),
            social: owned(SOCIAL),
            governance: owned(GOVERNANCE),
        }
    }
}

impl KeywordSet {
    #[must_use]
    pub fn keywords(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::Environmental => &self.environmental,
            KeywordCategory::Social => &self.social,
            KeywordCategory::Governance => &self.governance,
        }
    }

    /// All keywords across categories, in category then configuration order.
    pub fn all(&self) -> impl Iterator<Item = &str> {
        KeywordCategory::ALL
            .into_iter()
            .flat_map(move |c| self.keywords(c).iter().map(String::as_str))
    }

    /// Check that every category is non-empty and its keywords are
    /// non-blank, lowercase and unique.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in KeywordCategory::ALL {
            let list = self.keywords(category);
            if list.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category '{category}' has no keywords"
                )));
            }

            let mut seen = HashSet::new();
            for keyword in list {
                if keyword.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "category '{category}' contains a blank keyword"
                    )));
                }
                if keyword.to_lowercase() != *keyword {
                    return Err(ConfigError::Validation(format!(
                        "keyword '{keyword}' in '{category}' must be lowercase"
                    )));
                }
                if !seen.insert(keyword.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "duplicate keyword '{keyword}' in '{category}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Load and validate a keyword set from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_keywords(path: &Path) -> Result<KeywordSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::KeywordsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_keywords(&content)
}

fn parse_keywords(content: &str) -> Result<KeywordSet, ConfigError> {
    let set: KeywordSet = serde_yaml::from_str(content)?;
    set.validate()?;
    Ok(set)
}
