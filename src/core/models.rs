use serde::{Deserialize, Serialize};

/// Immutable article text submitted for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Which boundary a chunk was cut on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    Paragraph,
    /// The paragraph alone was over budget, so it was packed sentence by sentence.
    Sentence,
}

/// Contiguous slice of a document. `start`/`end` are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub boundary: BoundaryKind,
}

impl Chunk {
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkSummary {
    pub chunk_index: usize,
    pub text: String,
    pub source_len: usize,
    pub summary_len: usize,
}

/// Chunk summaries joined in original order by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSummary {
    text: String,
}

impl CombinedSummary {
    #[must_use]
    pub fn from_summaries(summaries: &[ChunkSummary]) -> Self {
        let text = summaries
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self { text }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        Document::new(self.text)
    }
}

/// Exactly three sentence slots. Slots may be empty under the lenient policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalSummary {
    sentences: [String; 3],
}

impl FinalSummary {
    #[must_use]
    pub fn new(sentences: [String; 3]) -> Self {
        Self { sentences }
    }

    #[must_use]
    pub fn sentences(&self) -> &[String; 3] {
        &self.sentences
    }

    /// Number of non-empty slots.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.sentences.iter().filter(|s| !s.is_empty()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled() == 3
    }

    /// Non-empty sentences joined by single spaces.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.sentences
            .iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.sentences
            .iter()
            .map(|s| s.split_whitespace().count())
            .sum()
    }
}

/// Advisory output length hints handed to the model, in tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthBounds {
    pub min_len: usize,
    pub max_len: usize,
}

/// One summarize-and-recombine pass over a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassReport {
    pub depth: usize,
    pub chunk_count: usize,
    pub input_chars: usize,
    pub output_chars: usize,
}

/// Result of a full hierarchical reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    pub summary: FinalSummary,
    pub passes: Vec<PassReport>,
    pub model_calls: usize,
}

impl Reduction {
    /// Chunk count of the first pass, i.e. how many sections the article was split into.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.passes.first().map_or(0, |p| p.chunk_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub original_words: usize,
    pub summary_words: usize,
    /// Summary words divided by original words.
    pub compression_ratio: f64,
    pub elapsed_ms: u64,
    pub chunk_count: usize,
}

impl SummaryStats {
    #[must_use]
    pub fn compute(document: &Document, reduction: &Reduction, elapsed_ms: u64) -> Self {
        let original_words = document.word_count();
        let summary_words = reduction.summary.word_count();
        #[allow(clippy::cast_precision_loss)]
        let compression_ratio = if original_words == 0 {
            0.0
        } else {
            summary_words as f64 / original_words as f64
        };
        Self {
            original_words,
            summary_words,
            compression_ratio,
            elapsed_ms,
            chunk_count: reduction.section_count(),
        }
    }

    #[must_use]
    pub fn compression_percent(&self) -> f64 {
        self.compression_ratio * 100.0
    }
}
