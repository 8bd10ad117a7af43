//! Sentence splitting and the exactly-three-sentences extractor.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::config::Strictness;
use crate::core::models::FinalSummary;
use crate::errors::SummarizeError;

pub const SUMMARY_SENTENCES: usize = 3;

// Terminal punctuation, optional closing quotes/brackets, then whitespace.
static BOUNDARY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'\)\]\u{201D}\u{2019}]*\s+"#).expect("static regex compile")
});

/// Byte spans of the sentences in `text`, trimmed of surrounding whitespace.
///
/// A trailing fragment without terminal punctuation counts as a sentence, so text
/// with no punctuation at all is a single sentence.
#[must_use]
pub fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;

    for m in BOUNDARY_RE.find_iter(text) {
        let matched = m.as_str();
        let whitespace = matched.len() - matched.trim_end().len();
        push_trimmed(text, start, m.end() - whitespace, &mut spans);
        start = m.end();
    }
    push_trimmed(text, start, text.len(), &mut spans);

    spans
}

#[must_use]
pub fn split_into_sentences(text: &str) -> Vec<&str> {
    sentence_spans(text)
        .into_iter()
        .map(|(start, end)| &text[start..end])
        .collect()
}

pub(crate) fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    spans.push((start + lead, start + lead + trimmed.len()));
}

/// Collapse internal whitespace and capitalize the first letter.
#[must_use]
pub fn format_sentence(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reduce arbitrary model output to exactly three sentence slots.
///
/// With three or more sentences the first three are kept. With fewer, the lenient
/// policy fills the remaining slots with empty strings and the strict policy fails
/// with [`SummarizeError::InsufficientContent`]. Sentences are never repeated or
/// invented to fill a slot.
///
/// # Errors
///
/// Returns `InsufficientContent` under [`Strictness::Strict`] when fewer than three
/// sentences are found.
pub fn extract_three(text: &str, strictness: Strictness) -> Result<FinalSummary, SummarizeError> {
    let sentences: Vec<String> = split_into_sentences(text)
        .into_iter()
        .map(format_sentence)
        .filter(|s| !s.is_empty())
        .take(SUMMARY_SENTENCES)
        .collect();

    if sentences.len() < SUMMARY_SENTENCES && strictness == Strictness::Strict {
        return Err(SummarizeError::InsufficientContent {
            found: sentences.len(),
        });
    }

    let mut slots = sentences.into_iter();
    Ok(FinalSummary::new(std::array::from_fn(|_| {
        slots.next().unwrap_or_default()
    })))
}
