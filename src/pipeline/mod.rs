//! Chunk, reduce, and extract: the article summarization pipeline.

pub mod chunker;
pub mod length;
pub mod reducer;
pub mod sentences;

pub use chunker::{Chunker, chunk};
pub use reducer::HierarchicalSummarizer;
pub use sentences::{extract_three, split_into_sentences};
