//! Offline extractive model: keeps the leading sentences that fit the word budget.

use async_trait::async_trait;

use super::traits::SummaryModel;
use crate::core::models::LengthBounds;
use crate::errors::SummarizeError;
use crate::pipeline::sentences::split_into_sentences;

#[derive(Debug, Clone, Copy, Default)]
pub struct LeadModel;

impl LeadModel {
    /// Leading sentences of `text` totalling at most `max_words` words. The first
    /// sentence is always kept, even when it alone is over budget.
    #[must_use]
    pub fn lead(text: &str, max_words: usize) -> String {
        let mut kept: Vec<String> = Vec::new();
        let mut words = 0;
        for sentence in split_into_sentences(text) {
            let count = sentence.split_whitespace().count();
            if !kept.is_empty() && words + count > max_words {
                break;
            }
            words += count;
            kept.push(sentence.split_whitespace().collect::<Vec<_>>().join(" "));
        }
        kept.join(" ")
    }
}

#[async_trait]
impl SummaryModel for LeadModel {
    fn name(&self) -> &str {
        "lead-sentences"
    }

    fn description(&self) -> &str {
        "Extractive leading-sentence baseline (offline)"
    }

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError> {
        Ok(Self::lead(text, bounds.max_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_sentences_within_budget() {
        let text = "One two three. Four five six. Seven eight nine.";
        assert_eq!(LeadModel::lead(text, 6), "One two three. Four five six.");
    }

    #[test]
    fn first_sentence_always_kept() {
        let text = "This opening sentence is rather long. Short.";
        assert_eq!(LeadModel::lead(text, 2), "This opening sentence is rather long.");
    }

    #[tokio::test]
    async fn summarize_uses_max_len() {
        let out = LeadModel
            .summarize(
                "A b.\n\nC d. E f.",
                LengthBounds {
                    min_len: 1,
                    max_len: 4,
                },
            )
            .await
            .unwrap();
        assert_eq!(out, "A b. C d.");
    }
}
