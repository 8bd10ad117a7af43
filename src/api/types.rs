//! Request and response bodies for the summarize endpoint.

use serde::{Deserialize, Serialize};

use crate::core::models::{Reduction, SummaryStats};

/// How the caller wants the answer rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    /// Submitted from the web form.
    Html,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequestBody {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct ArticleRequest {
    pub text: String,
    pub format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub request_id: String,
    pub generated_at: String,
    pub summary: [String; 3],
    pub stats: SummaryStats,
    pub insights: Vec<String>,
    pub model: ModelInfo,
}

/// Plain-language description of what the pipeline did for this article.
#[must_use]
pub fn insights(reduction: &Reduction) -> Vec<String> {
    let sections = reduction.section_count();
    let mut out = Vec::new();
    if sections <= 1 {
        out.push("Analyzed article as a single unit (short article)".to_string());
    } else {
        out.push(format!("Broke article into {sections} logical sections"));
        out.push("Summarized each section individually".to_string());
        out.push("Combined section summaries into one overview".to_string());
    }
    if reduction.passes.len() > 1 {
        out.push(format!(
            "Needed {} reduction passes to fit the model input",
            reduction.passes.len()
        ));
    }
    out.push(format!(
        "Final condensation to 3 sentences using {} model calls",
        reduction.model_calls
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{FinalSummary, PassReport};

    fn reduction(chunk_counts: &[usize], model_calls: usize) -> Reduction {
        Reduction {
            summary: FinalSummary::new(["A.".into(), "B.".into(), "C.".into()]),
            passes: chunk_counts
                .iter()
                .enumerate()
                .map(|(i, &chunk_count)| PassReport {
                    depth: i + 1,
                    chunk_count,
                    input_chars: 0,
                    output_chars: 0,
                })
                .collect(),
            model_calls,
        }
    }

    #[test]
    fn single_section_insight() {
        let out = insights(&reduction(&[1], 1));
        assert_eq!(out[0], "Analyzed article as a single unit (short article)");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn multi_pass_insights() {
        let out = insights(&reduction(&[6, 2], 9));
        assert_eq!(out[0], "Broke article into 6 logical sections");
        assert!(out.iter().any(|s| s.contains("2 reduction passes")));
        assert!(out.last().unwrap().contains("9 model calls"));
    }
}
