//! Keyword occurrence counting over lowercased text.

use regex::Regex;
use secesg_core::{KeywordCategory, KeywordSet, MatchMode};

use crate::error::ScorerError;

#[derive(Debug, Clone)]
enum Pattern {
    Literal(String),
    Bounded(Regex),
}

impl Pattern {
    /// Non-overlapping occurrences within `lowered`.
    fn count(&self, lowered: &str) -> usize {
        match self {
            Pattern::Literal(keyword) => lowered.matches(keyword.as_str()).count(),
            Pattern::Bounded(re) => re.find_iter(lowered).count(),
        }
    }

    fn is_match(&self, lowered: &str) -> bool {
        match self {
            Pattern::Literal(keyword) => lowered.contains(keyword.as_str()),
            Pattern::Bounded(re) => re.is_match(lowered),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escaped keyword with `\b` only on edges that are word characters, so
/// keywords like `u.s.` still match before a space or end of text.
fn bounded_pattern(lowered: &str) -> String {
    let start = if lowered.starts_with(is_word_char) { r"\b" } else { "" };
    let end = if lowered.ends_with(is_word_char) { r"\b" } else { "" };
    format!("{start}{}{end}", regex::escape(lowered))
}

/// Compiled keyword patterns for the three categories.
#[derive(Debug, Clone)]
pub(crate) struct KeywordMatcher {
    environmental: Vec<Pattern>,
    social: Vec<Pattern>,
    governance: Vec<Pattern>,
}

impl KeywordMatcher {
    /// Literal substring matcher. Blank keywords are skipped since they would
    /// match between every character.
    pub(crate) fn substring(keywords: &KeywordSet) -> Self {
        let build = |list: &[String]| {
            list.iter()
                .filter(|k| !k.trim().is_empty())
                .map(|k| Pattern::Literal(k.to_lowercase()))
                .collect()
        };
        Self {
            environmental: build(&keywords.environmental),
            social: build(&keywords.social),
            governance: build(&keywords.governance),
        }
    }

    pub(crate) fn new(keywords: &KeywordSet, mode: MatchMode) -> Result<Self, ScorerError> {
        match mode {
            MatchMode::Substring => Ok(Self::substring(keywords)),
            MatchMode::WordBoundary => {
                let build = |list: &[String]| -> Result<Vec<Pattern>, ScorerError> {
                    list.iter()
                        .filter(|k| !k.trim().is_empty())
                        .map(|k| {
                            let lowered = k.to_lowercase();
                            Regex::new(&bounded_pattern(&lowered))
                                .map(Pattern::Bounded)
                                .map_err(|source| ScorerError::InvalidPattern {
                                    keyword: k.clone(),
                                    source,
                                })
                        })
                        .collect()
                };
                Ok(Self {
                    environmental: build(&keywords.environmental)?,
                    social: build(&keywords.social)?,
                    governance: build(&keywords.governance)?,
                })
            }
        }
    }

    fn patterns(&self, category: KeywordCategory) -> &[Pattern] {
        match category {
            KeywordCategory::Environmental => &self.environmental,
            KeywordCategory::Social => &self.social,
            KeywordCategory::Governance => &self.governance,
        }
    }

    /// Sum of per-keyword occurrence counts for one category.
    pub(crate) fn count(&self, category: KeywordCategory, lowered: &str) -> usize {
        self.patterns(category).iter().map(|p| p.count(lowered)).sum()
    }

    /// Whether any keyword of any category occurs in `lowered`.
    pub(crate) fn any_match(&self, lowered: &str) -> bool {
        KeywordCategory::ALL
            .into_iter()
            .any(|c| self.patterns(c).iter().any(|p| p.is_match(lowered)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(environmental: &[&str], social: &[&str], governance: &[&str]) -> KeywordSet {
        let owned = |l: &[&str]| l.iter().map(|s| (*s).to_string()).collect();
        KeywordSet {
            environmental: owned(environmental),
            social: owned(social),
            governance: owned(governance),
        }
    }

    #[test]
    fn substring_counts_inside_longer_words() {
        let m = KeywordMatcher::substring(&set(&["green"], &[], &[]));
        assert_eq!(m.count(KeywordCategory::Environmental, "greenfield green"), 2);
    }

    #[test]
    fn overlapping_keywords_are_each_counted() {
        let m = KeywordMatcher::substring(&set(&["carbon", "carbon neutral"], &[], &[]));
        assert_eq!(
            m.count(KeywordCategory::Environmental, "we aim to be carbon neutral"),
            2
        );
    }

    #[test]
    fn repeated_occurrences_are_non_overlapping() {
        let m = KeywordMatcher::substring(&set(&[], &["aa"], &[]));
        assert_eq!(m.count(KeywordCategory::Social, "aaaa"), 2);
        assert_eq!(m.count(KeywordCategory::Social, "aaa"), 1);
    }

    #[test]
    fn word_boundary_skips_embedded_matches() {
        let m = KeywordMatcher::new(&set(&["green"], &["dei"], &[]), MatchMode::WordBoundary)
            .unwrap();
        assert_eq!(m.count(KeywordCategory::Environmental, "greenfield green."), 1);
        assert_eq!(m.count(KeywordCategory::Social, "the deity"), 0);
        assert!(!m.any_match("greenfield deity"));
        assert!(m.any_match("our dei program"));
    }

    #[test]
    fn word_boundary_escapes_regex_metacharacters() {
        let m = KeywordMatcher::new(&set(&[], &[], &["s.e.c"]), MatchMode::WordBoundary)
            .unwrap();
        assert_eq!(m.count(KeywordCategory::Governance, "the s.e.c review"), 1);
        assert_eq!(m.count(KeywordCategory::Governance, "sxecx"), 0);
    }

    #[test]
    fn word_boundary_keyword_ending_in_punctuation_matches() {
        let m = KeywordMatcher::new(&set(&["u.s."], &[], &[]), MatchMode::WordBoundary)
            .unwrap();
        assert_eq!(m.count(KeywordCategory::Environmental, "the u.s. market"), 1);
        assert_eq!(m.count(KeywordCategory::Environmental, "u.s. and u.s."), 2);
        assert_eq!(m.count(KeywordCategory::Environmental, "thou.s. pipeline"), 0);
    }

    #[test]
    fn bounded_pattern_anchors_word_edges_only() {
        assert_eq!(bounded_pattern("carbon"), r"\bcarbon\b");
        assert_eq!(bounded_pattern("u.s."), r"\bu\.s\.");
        let m = KeywordMatcher::new(&set(&[], &["#esg"], &[]), MatchMode::WordBoundary)
            .unwrap();
        assert_eq!(m.count(KeywordCategory::Social, "our #esg goals, #esgs"), 1);
    }

    #[test]
    fn blank_keywords_are_ignored() {
        let m = KeywordMatcher::substring(&set(&[""], &["  "], &[]));
        assert_eq!(m.count(KeywordCategory::Environmental, "anything"), 0);
        assert!(!m.any_match("anything"));
    }

    #[test]
    fn any_match_spans_categories() {
        let m = KeywordMatcher::substring(&set(&["carbon"], &["labor"], &["audit"]));
        assert!(m.any_match("the audit committee"));
        assert!(!m.any_match("we love dogs"));
    }
}
