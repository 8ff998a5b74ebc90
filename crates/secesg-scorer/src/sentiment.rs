//! Rule-based lexicon sentiment for corporate disclosure text.

/// Produces a compound polarity score in `[-1.0, 1.0]` for a text segment.
pub trait SentimentScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// Word valences on a `[-4.0, 4.0]` scale.
///
/// Keys are lowercase single words. General polarity words plus the
/// vocabulary that carries tone in annual reports and risk-factor sections.
pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("positive", 2.6),
    ("strong", 2.3),
    ("stronger", 2.2),
    ("improve", 1.9),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("improving", 1.8),
    ("benefit", 2.0),
    ("benefits", 1.6),
    ("success", 2.7),
    ("successful", 2.8),
    ("growth", 1.6),
    ("growing", 1.4),
    ("opportunity", 1.8),
    ("opportunities", 1.6),
    ("progress", 1.8),
    ("achieve", 1.9),
    ("achieved", 1.8),
    ("committed", 1.1),
    ("commitment", 1.1),
    ("support", 1.7),
    ("safe", 1.9),
    ("safety", 1.8),
    ("healthy", 1.7),
    ("clean", 1.7),
    ("leading", 1.4),
    ("leader", 1.5),
    ("innovative", 1.9),
    ("resilient", 1.6),
    ("efficient", 1.8),
    ("effective", 2.1),
    ("proud", 2.1),
    ("love", 3.2),
    ("best", 3.2),
    ("win", 2.8),
    ("gain", 2.0),
    ("gains", 1.8),
    ("profit", 1.9),
    ("profitable", 1.9),
    ("reward", 2.0),
    ("confident", 2.2),
    ("trust", 2.3),
    ("fair", 1.3),
    ("protect", 1.4),
    ("responsible", 1.3),
    // Negative signals
    ("bad", -2.5),
    ("poor", -2.1),
    ("negative", -2.7),
    ("weak", -1.9),
    ("risk", -1.1),
    ("risks", -1.1),
    ("adverse", -1.5),
    ("adversely", -1.6),
    ("loss", -1.3),
    ("losses", -1.7),
    ("decline", -1.4),
    ("declined", -1.3),
    ("decrease", -1.0),
    ("failure", -2.3),
    ("failed", -2.3),
    ("fail", -2.5),
    ("harm", -2.5),
    ("harmful", -2.6),
    ("damage", -2.2),
    ("damages", -1.9),
    ("hazard", -1.8),
    ("hazardous", -1.9),
    ("penalty", -1.9),
    ("penalties", -1.8),
    ("fine", -0.8),
    ("fines", -1.0),
    ("lawsuit", -1.7),
    ("litigation", -1.5),
    ("violation", -2.2),
    ("violations", -2.1),
    ("fraud", -3.0),
    ("corruption", -2.7),
    ("bribery", -2.6),
    ("uncertain", -1.2),
    ("uncertainty", -1.4),
    ("volatile", -1.5),
    ("volatility", -1.2),
    ("threat", -2.4),
    ("crisis", -3.1),
    ("disaster", -3.1),
    ("spill", -1.6),
    ("contamination", -2.0),
    ("pollution", -2.0),
    ("dangerous", -2.1),
    ("problem", -1.7),
    ("concern", -1.2),
    ("concerns", -1.2),
    ("warning", -1.4),
    ("terrible", -2.1),
    ("worst", -3.1),
    ("impairment", -1.5),
    ("shortfall", -1.6),
    ("difficult", -1.5),
];

/// Intensity modifiers applied to the next sentiment-bearing word.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", BOOST),
    ("extremely", BOOST),
    ("highly", BOOST),
    ("significantly", BOOST),
    ("substantially", BOOST),
    ("greatly", BOOST),
    ("particularly", BOOST),
    ("especially", BOOST),
    ("materially", BOOST),
    ("slightly", -BOOST),
    ("somewhat", -BOOST),
    ("marginally", -BOOST),
    ("partially", -BOOST),
    ("barely", -BOOST),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "none", "nor", "neither", "without", "cannot", "nothing", "nobody",
];

const BOOST: f64 = 0.293;
const CAPS_BOOST: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Normalization constant: `compound = s / sqrt(s^2 + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Lexicon scorer with negation, intensity, capitalization, contrast and
/// exclamation rules.
///
/// The lexicon holds roughly a hundred business and ESG terms. Sentences
/// without any of them score exactly 0.0, so expect far more neutral
/// results than a full general-purpose lexicon would give.
///
/// Exclamation emphasis only applies to text that still contains `!`.
/// [`crate::PunctuationSegmenter`] splits on `!`, so under the default
/// segmenter that rule never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl SentimentScorer for LexiconSentiment {
    fn compound(&self, text: &str) -> f64 {
        lexicon_score(text)
    }
}

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|raw| raw.trim_matches('\''))
        .filter(|raw| !raw.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

fn lookup(table: &[(&str, f64)], word: &str) -> Option<f64> {
    table.iter().find(|(w, _)| *w == word).map(|&(_, v)| v)
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

fn is_shouted(raw: &str) -> bool {
    raw.chars().any(char::is_alphabetic) && !raw.chars().any(char::is_lowercase)
}

/// Score a text segment.
///
/// Returns `0.0` for empty text or text with no lexicon words. The result is
/// always within `[-1.0, 1.0]`.
#[must_use]
pub fn lexicon_score(text: &str) -> f64 {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return 0.0;
    }

    // Emphasis from capitals only counts when the text mixes cases.
    let shouted = tokens.iter().filter(|t| is_shouted(t.raw)).count();
    let mixed_case = shouted > 0 && shouted < tokens.len();

    let mut valences = vec![0.0_f64; tokens.len()];
    for (i, token) in tokens.iter().enumerate() {
        let Some(mut valence) = lookup(LEXICON, &token.lower) else {
            continue;
        };

        if mixed_case && is_shouted(token.raw) {
            valence += CAPS_BOOST.copysign(valence);
        }

        let mut negated = false;
        for (distance, prior) in tokens[..i].iter().rev().take(3).enumerate() {
            if let Some(boost) = lookup(BOOSTERS, &prior.lower) {
                let damping = match distance {
                    0 => 1.0,
                    1 => 0.95,
                    _ => 0.9,
                };
                valence += boost * valence.signum() * damping;
            }
            if is_negator(&prior.lower) {
                negated = true;
            }
        }
        if negated {
            valence *= NEGATION_SCALAR;
        }

        valences[i] = valence;
    }

    // Sentiment after a contrastive "but" dominates what precedes it.
    if let Some(pivot) = tokens.iter().position(|t| t.lower == "but") {
        for (i, valence) in valences.iter_mut().enumerate() {
            if i < pivot {
                *valence *= 0.5;
            } else if i > pivot {
                *valence *= 1.5;
            }
        }
    }

    let mut sum: f64 = valences.iter().sum();
    if sum.abs() < f64::EPSILON {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let emphasis = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_BOOST;
    sum += emphasis.copysign(sum);

    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(lexicon_score("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("climate change is real"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = lexicon_score("our emissions program delivered strong progress");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = lexicon_score("the spill caused significant damage");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn single_word_matches_normalization_formula() {
        // good = 1.9 -> 1.9 / sqrt(1.9^2 + 15)
        let expected = 1.9 / (1.9_f64.powi(2) + 15.0).sqrt();
        let score = lexicon_score("good");
        assert!((score - expected).abs() < 1e-9, "got {score}, expected {expected}");
    }

    #[test]
    fn negation_flips_polarity() {
        let plain = lexicon_score("the results were good");
        let negated = lexicon_score("the results were not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0, "expected negated score below zero, got {negated}");
    }

    #[test]
    fn contraction_negates() {
        assert!(lexicon_score("it wasn't successful") < 0.0);
    }

    #[test]
    fn booster_increases_magnitude() {
        let plain = lexicon_score("a good year");
        let boosted = lexicon_score("a very good year");
        assert!(boosted > plain, "expected {boosted} > {plain}");
    }

    #[test]
    fn dampener_decreases_magnitude() {
        let plain = lexicon_score("a good year");
        let damped = lexicon_score("a slightly good year");
        assert!(damped < plain && damped > 0.0, "expected 0 < {damped} < {plain}");
    }

    #[test]
    fn booster_on_negative_word_makes_it_more_negative() {
        let plain = lexicon_score("an adverse outcome");
        let boosted = lexicon_score("a materially adverse outcome");
        assert!(boosted < plain, "expected {boosted} < {plain}");
    }

    #[test]
    fn capitals_add_emphasis_in_mixed_case_text() {
        let plain = lexicon_score("results were great");
        let shouted = lexicon_score("results were GREAT");
        assert!(shouted > plain, "expected {shouted} > {plain}");
    }

    #[test]
    fn all_caps_text_gets_no_caps_emphasis() {
        assert_eq!(lexicon_score("GREAT"), lexicon_score("great"));
    }

    #[test]
    fn clause_after_but_dominates() {
        let score = lexicon_score("revenue was good but the outlook is terrible");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn exclamation_adds_emphasis() {
        let plain = lexicon_score("great year");
        let excited = lexicon_score("great year!!");
        assert!(excited > plain, "expected {excited} > {plain}");
    }

    #[test]
    fn score_stays_within_bounds() {
        let positive = "great excellent best love success successful win strong great excellent!!!!";
        let negative = "fraud crisis disaster worst harmful fraud crisis disaster worst!!!!";
        let p = lexicon_score(positive);
        let n = lexicon_score(negative);
        assert!(p > 0.9 && p <= 1.0, "got {p}");
        assert!(n < -0.9 && n >= -1.0, "got {n}");
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let score = lexicon_score("\"great,\"");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn trait_object_delegates_to_lexicon() {
        let scorer: &dyn SentimentScorer = &LexiconSentiment;
        assert_eq!(scorer.compound("good"), lexicon_score("good"));
    }

    #[test]
    fn sentence_without_lexicon_terms_is_neutral() {
        let score = lexicon_score("The company filed its annual report with the commission");
        assert!(score.abs() < f64::EPSILON, "expected 0.0, got {score}");
    }

    #[test]
    fn default_segmenter_removes_exclamation_emphasis() {
        use crate::segment::{PunctuationSegmenter, Segmenter};

        let segments = PunctuationSegmenter.segment("Results were good!!!");
        assert!(lexicon_score("Results were good!!!") > lexicon_score("Results were good"));
        assert!(
            (lexicon_score(segments[0]) - lexicon_score("Results were good")).abs() < f64::EPSILON
        );
    }
}
