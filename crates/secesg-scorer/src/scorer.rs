//! Per-document ESG keyword density and sentiment scoring.

use secesg_core::{Document, KeywordCategory, KeywordSet, MatchMode};

use crate::error::ScorerError;
use crate::matcher::KeywordMatcher;
use crate::segment::{PunctuationSegmenter, Segmenter};
use crate::sentiment::{LexiconSentiment, SentimentScorer};
use crate::types::DocumentScore;

/// Scores filings against a fixed keyword configuration.
///
/// Holds only immutable configuration, so one scorer can be shared across
/// any number of `score` calls.
pub struct EsgScorer {
    keywords: KeywordSet,
    match_mode: MatchMode,
    matcher: KeywordMatcher,
    segmenter: Box<dyn Segmenter>,
    sentiment: Box<dyn SentimentScorer>,
}

impl std::fmt::Debug for EsgScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EsgScorer")
            .field("keywords", &self.keywords)
            .field("match_mode", &self.match_mode)
            .finish_non_exhaustive()
    }
}

impl Default for EsgScorer {
    fn default() -> Self {
        Self::new(KeywordSet::default())
    }
}

impl EsgScorer {
    /// Scorer with substring matching, punctuation segmentation and the
    /// built-in lexicon sentiment.
    #[must_use]
    pub fn new(keywords: KeywordSet) -> Self {
        Self {
            matcher: KeywordMatcher::substring(&keywords),
            keywords,
            match_mode: MatchMode::Substring,
            segmenter: Box::new(PunctuationSegmenter),
            sentiment: Box::new(LexiconSentiment),
        }
    }

    #[must_use]
    pub fn builder(keywords: KeywordSet) -> EsgScorerBuilder {
        EsgScorerBuilder {
            keywords,
            match_mode: MatchMode::default(),
            segmenter: None,
            sentiment: None,
        }
    }

    #[must_use]
    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    #[must_use]
    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// Score one document.
    ///
    /// Empty content yields an all-zero record. Keyword counts are summed
    /// per category without deduplicating keywords that overlap.
    #[must_use]
    pub fn score(&self, document: &Document) -> DocumentScore {
        let content = document.content.as_str();
        let lowered = content.to_lowercase();

        let e_count = self.matcher.count(KeywordCategory::Environmental, &lowered);
        let s_count = self.matcher.count(KeywordCategory::Social, &lowered);
        let g_count = self.matcher.count(KeywordCategory::Governance, &lowered);
        let overall_count = e_count + s_count + g_count;

        let word_count = content.split_whitespace().count();
        #[allow(clippy::cast_precision_loss)]
        let normalized = |count: usize| -> f64 {
            if word_count == 0 {
                0.0
            } else {
                count as f64 / word_count as f64 * 1000.0
            }
        };

        let relevant: Vec<&str> = self
            .segmenter
            .segment(content)
            .into_iter()
            .filter(|segment| self.matcher.any_match(&segment.to_lowercase()))
            .map(str::trim)
            .collect();

        let avg_sentiment = if relevant.is_empty() {
            0.0
        } else {
            let sum: f64 = relevant.iter().map(|s| self.sentiment.compound(s)).sum();
            #[allow(clippy::cast_precision_loss)]
            let denom = relevant.len() as f64;
            sum / denom
        };

        tracing::debug!(
            ticker = %document.metadata.ticker,
            date = %document.metadata.date,
            word_count,
            overall_count,
            esg_sentences = relevant.len(),
            "scored document"
        );

        DocumentScore {
            ticker: document.metadata.ticker.clone(),
            filing_type: document.metadata.filing_type.clone(),
            date: document.metadata.date.clone(),
            year: document.year(),
            e_count,
            e_normalized: normalized(e_count),
            s_count,
            s_normalized: normalized(s_count),
            g_count,
            g_normalized: normalized(g_count),
            overall_count,
            overall_normalized: normalized(overall_count),
            word_count,
            esg_sentences: relevant.len(),
            avg_sentiment,
        }
    }
}

/// Builder for an [`EsgScorer`] with non-default strategies.
pub struct EsgScorerBuilder {
    keywords: KeywordSet,
    match_mode: MatchMode,
    segmenter: Option<Box<dyn Segmenter>>,
    sentiment: Option<Box<dyn SentimentScorer>>,
}

impl EsgScorerBuilder {
    #[must_use]
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    #[must_use]
    pub fn segmenter(mut self, segmenter: impl Segmenter + 'static) -> Self {
        self.segmenter = Some(Box::new(segmenter));
        self
    }

    #[must_use]
    pub fn sentiment(mut self, sentiment: impl SentimentScorer + 'static) -> Self {
        self.sentiment = Some(Box::new(sentiment));
        self
    }

    /// # Errors
    ///
    /// Returns [`ScorerError::InvalidPattern`] if a keyword cannot be compiled
    /// into a word-boundary pattern.
    pub fn build(self) -> Result<EsgScorer, ScorerError> {
        let matcher = KeywordMatcher::new(&self.keywords, self.match_mode)?;
        Ok(EsgScorer {
            keywords: self.keywords,
            match_mode: self.match_mode,
            matcher,
            segmenter: self
                .segmenter
                .unwrap_or_else(|| Box::new(PunctuationSegmenter)),
            sentiment: self
                .sentiment
                .unwrap_or_else(|| Box::new(LexiconSentiment)),
        })
    }
}
