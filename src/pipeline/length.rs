use crate::core::models::LengthBounds;

/// Target summary length for a document that fits in one chunk.
pub const TARGET_WORDS_SINGLE: usize = 80;
/// Target summary length for each chunk of a multi-chunk document.
pub const TARGET_WORDS_PER_CHUNK: usize = 60;
/// Target summary length for the pass over combined chunk summaries.
pub const TARGET_WORDS_COMBINED: usize = 70;

const MAX_SUMMARY_TOKENS: usize = 256;
const MIN_SUMMARY_TOKENS: usize = 10;

impl LengthBounds {
    /// Derive advisory bounds from the size of the input.
    ///
    /// `max_len` is the larger of 1.3x the target and 0.4x the input word count,
    /// capped at 256; `min_len` is a fifth of that, at least 10 but never above `max_len`.
    #[must_use]
    pub fn for_text(text: &str, target_words: usize) -> Self {
        let words = text.split_whitespace().count();
        let from_target = target_words * 13 / 10;
        let from_input = words * 2 / 5;
        let max_len = from_target.max(from_input).min(MAX_SUMMARY_TOKENS);
        let min_len = (max_len / 5).max(MIN_SUMMARY_TOKENS).min(max_len);
        Self { min_len, max_len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_uses_target() {
        let b = LengthBounds::for_text("just a few words", TARGET_WORDS_SINGLE);
        assert_eq!(b, LengthBounds { min_len: 20, max_len: 104 });
    }

    #[test]
    fn long_input_scales_with_word_count() {
        let text = "word ".repeat(300);
        let b = LengthBounds::for_text(&text, TARGET_WORDS_PER_CHUNK);
        assert_eq!(b.max_len, 120);
        assert_eq!(b.min_len, 24);
    }

    #[test]
    fn capped_at_256() {
        let text = "word ".repeat(5000);
        let b = LengthBounds::for_text(&text, TARGET_WORDS_COMBINED);
        assert_eq!(b.max_len, 256);
        assert_eq!(b.min_len, 51);
    }

    #[test]
    fn min_never_exceeds_max() {
        let b = LengthBounds::for_text("", 0);
        assert!(b.min_len <= b.max_len);
    }
}
