//! Paragraph-aware chunking of article text.
//!
//! Paragraphs (blank-line separated) are packed greedily into chunks of at most
//! `max_chars` characters. A paragraph that is over budget on its own is packed
//! sentence by sentence instead. Chunks never split a sentence: a single sentence
//! longer than the budget becomes its own oversized chunk, so the budget is a
//! target rather than a hard cap in that one case.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::sentences::{push_trimmed, sentence_spans};
use crate::core::models::{BoundaryKind, Chunk, Document};
use crate::errors::SummarizeError;

static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t\r]*\n\s*").expect("static regex compile"));

/// Byte spans of the non-blank paragraphs in `text`.
#[must_use]
pub fn paragraph_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for m in PARAGRAPH_BREAK_RE.find_iter(text) {
        push_trimmed(text, start, m.start(), &mut spans);
        start = m.end();
    }
    push_trimmed(text, start, text.len(), &mut spans);
    spans
}

#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    max_chars: usize,
}

impl Chunker {
    #[must_use]
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Split `document` into ordered chunks.
    ///
    /// # Errors
    ///
    /// Returns [`SummarizeError::EmptyInput`] when the document is blank or has no
    /// alphanumeric content to form a sentence from.
    pub fn chunk(&self, document: &Document) -> Result<Vec<Chunk>, SummarizeError> {
        let text = document.text();
        if !text.chars().any(char::is_alphanumeric) {
            return Err(SummarizeError::EmptyInput);
        }

        let mut packer = Packer::new(text, self.max_chars);
        for (start, end) in paragraph_spans(text) {
            if char_len(&text[start..end]) > self.max_chars {
                packer.flush();
                packer.boundary = BoundaryKind::Sentence;
                for (s, e) in sentence_spans(&text[start..end]) {
                    packer.add(start + s, start + e);
                }
                packer.flush();
                packer.boundary = BoundaryKind::Paragraph;
            } else {
                packer.add(start, end);
            }
        }
        packer.flush();

        debug!(
            chunk_count = packer.chunks.len(),
            max_chars = self.max_chars,
            input_chars = document.char_len(),
            "Chunked document"
        );
        Ok(packer.chunks)
    }
}

/// Chunk `document` with the given character budget.
///
/// # Errors
///
/// See [`Chunker::chunk`].
pub fn chunk(document: &Document, max_chars: usize) -> Result<Vec<Chunk>, SummarizeError> {
    Chunker::new(max_chars).chunk(document)
}

/// Greedy accumulator of adjacent spans.
struct Packer<'a> {
    text: &'a str,
    max_chars: usize,
    boundary: BoundaryKind,
    pending: Option<(usize, usize)>,
    chunks: Vec<Chunk>,
}

impl<'a> Packer<'a> {
    fn new(text: &'a str, max_chars: usize) -> Self {
        Self {
            text,
            max_chars,
            boundary: BoundaryKind::Paragraph,
            pending: None,
            chunks: Vec::new(),
        }
    }

    fn add(&mut self, start: usize, end: usize) {
        self.pending = match self.pending {
            Some((group_start, _)) if char_len(&self.text[group_start..end]) <= self.max_chars => {
                Some((group_start, end))
            }
            Some(_) => {
                self.flush();
                Some((start, end))
            }
            None => Some((start, end)),
        };
    }

    fn flush(&mut self) {
        if let Some((start, end)) = self.pending.take() {
            self.chunks.push(Chunk {
                index: self.chunks.len(),
                text: self.text[start..end].to_string(),
                start,
                end,
                boundary: self.boundary,
            });
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
