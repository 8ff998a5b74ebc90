//! Sentence segmentation strategies.

/// Splits text into sentence-like segments.
///
/// Segments borrow from the input and are returned in order. Implementations
/// may return empty or whitespace-only segments; callers trim as needed.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Splits on every `.`, `!` and `?`.
///
/// No abbreviation, decimal or quotation handling: `"U.S. revenue rose 2.5%"`
/// yields four segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

impl Segmenter for PunctuationSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(['.', '!', '?']).collect()
    }
}
