//! Hierarchical summarize-and-recombine driver.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::chunker::Chunker;
use super::length::{TARGET_WORDS_COMBINED, TARGET_WORDS_PER_CHUNK, TARGET_WORDS_SINGLE};
use super::sentences::extract_three;
use crate::ai::SummaryModel;
use crate::core::config::SummarizerConfig;
use crate::core::models::{
    Chunk, ChunkSummary, CombinedSummary, Document, FinalSummary, LengthBounds, PassReport,
    Reduction,
};
use crate::errors::SummarizeError;

/// Reduces a document of any length to a three-sentence summary.
///
/// Each pass chunks the current text and summarizes every chunk in order. The
/// chunk summaries are joined with single spaces; if that fits the model input
/// budget it gets one final summarize call, otherwise it becomes the input of the
/// next pass. The final call never sees more than `input_budget_chars`. A
/// document that fits in a single chunk and in the budget is summarized with
/// exactly one model call. Passes are capped by `max_depth`.
pub struct HierarchicalSummarizer {
    model: Arc<dyn SummaryModel>,
    config: SummarizerConfig,
    chunker: Chunker,
}

impl HierarchicalSummarizer {
    #[must_use]
    pub fn new(model: Arc<dyn SummaryModel>, config: SummarizerConfig) -> Self {
        let chunker = Chunker::new(config.chunk_max_chars);
        Self {
            model,
            config,
            chunker,
        }
    }

    /// Summarize `document` into exactly three sentence slots.
    ///
    /// # Errors
    ///
    /// `ConfigError` for an invalid configuration, `EmptyInput` for blank documents, `ModelUnavailable`/`ModelTimeout` when a
    /// model call fails, `ReductionDepthExceeded` when the text does not fit the
    /// input budget within `max_depth` passes, and `InsufficientContent` under the
    /// strict sentence policy.
    pub async fn reduce(&self, document: &Document) -> Result<FinalSummary, SummarizeError> {
        Ok(self.run(document).await?.summary)
    }

    /// Like [`reduce`](Self::reduce) but also reports every pass.
    ///
    /// # Errors
    ///
    /// See [`reduce`](Self::reduce).
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(model = %self.model.name(), input_chars = document.char_len())
    )]
    pub async fn run(&self, document: &Document) -> Result<Reduction, SummarizeError> {
        self.config.validate().map_err(SummarizeError::ConfigError)?;

        let mut passes = Vec::new();
        let mut model_calls = 0;
        let mut current = document.clone();
        let mut depth = 1;

        let terminal = loop {
            let chunks = self.chunker.chunk(&current)?;
            let input_chars = current.char_len();

            if depth == 1
                && input_chars <= self.config.input_budget_chars
                && let [only] = chunks.as_slice()
            {
                let bounds = LengthBounds::for_text(&only.text, TARGET_WORDS_SINGLE);
                let text = self.call_model(&only.text, bounds).await?;
                model_calls += 1;
                passes.push(PassReport {
                    depth,
                    chunk_count: 1,
                    input_chars,
                    output_chars: text.chars().count(),
                });
                break text;
            }

            let summaries = self.summarize_chunks(&chunks).await?;
            model_calls += summaries.len();
            let combined = CombinedSummary::from_summaries(&summaries);
            passes.push(PassReport {
                depth,
                chunk_count: chunks.len(),
                input_chars,
                output_chars: combined.char_len(),
            });

            if combined.char_len() <= self.config.input_budget_chars {
                let bounds = LengthBounds::for_text(combined.text(), TARGET_WORDS_COMBINED);
                let text = self.call_model(combined.text(), bounds).await?;
                model_calls += 1;
                break text;
            }

            if depth >= self.config.max_depth {
                warn!(
                    depth,
                    combined_chars = combined.char_len(),
                    budget = self.config.input_budget_chars,
                    "Reduction did not converge"
                );
                return Err(SummarizeError::ReductionDepthExceeded {
                    passes: depth,
                    max_depth: self.config.max_depth,
                });
            }

            info!(
                depth,
                combined_chars = combined.char_len(),
                budget = self.config.input_budget_chars,
                "Combined summary over budget, starting another pass"
            );
            depth += 1;
            current = combined.into_document();
        };

        let summary = extract_three(&terminal, self.config.strictness)?;
        info!(passes = passes.len(), model_calls, "Reduction complete");

        Ok(Reduction {
            summary,
            passes,
            model_calls,
        })
    }

    async fn summarize_chunks(&self, chunks: &[Chunk]) -> Result<Vec<ChunkSummary>, SummarizeError> {
        let mut summaries = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let bounds = LengthBounds::for_text(&chunk.text, TARGET_WORDS_PER_CHUNK);
            let text = self.call_model(&chunk.text, bounds).await?;
            debug!(
                chunk_index = chunk.index,
                source_len = chunk.char_len(),
                summary_len = text.chars().count(),
                "Summarized chunk"
            );
            summaries.push(ChunkSummary {
                chunk_index: chunk.index,
                source_len: chunk.char_len(),
                summary_len: text.chars().count(),
                text,
            });
        }
        Ok(summaries)
    }

    async fn call_model(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError> {
        let call = self.model.summarize(text, bounds);
        let output = match self.config.model_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| SummarizeError::ModelTimeout(limit))??,
            None => call.await?,
        };
        Ok(output.trim().to_string())
    }
}
