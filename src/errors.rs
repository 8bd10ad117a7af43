use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("No usable text to summarize")]
    EmptyInput,

    #[error("Summarization model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Reduction did not converge after {passes} passes (max depth {max_depth})")]
    ReductionDepthExceeded { passes: usize, max_depth: usize },

    #[error("Summary has only {found} sentences, 3 required")]
    InsufficientContent { found: usize },

    #[error("Summarization model timed out after {0:?}")]
    ModelTimeout(Duration),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl SummarizeError {
    /// Message safe to show to the person who submitted the article.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::EmptyInput => "Please paste some text to summarize!".to_string(),
            SummarizeError::ModelUnavailable(_) | SummarizeError::HttpError(_) => {
                "The summarization model is unavailable right now. Please try again later."
                    .to_string()
            }
            SummarizeError::ReductionDepthExceeded { .. } => {
                "This article is too long to condense. Try a shorter excerpt.".to_string()
            }
            SummarizeError::InsufficientContent { found } => format!(
                "The article did not contain enough content for a 3-sentence summary (got {found})."
            ),
            SummarizeError::ModelTimeout(_) => {
                "The summarization model took too long to respond. Please try again.".to_string()
            }
            SummarizeError::ConfigError(_) => {
                "The summarizer is misconfigured. Please contact the administrator.".to_string()
            }
            SummarizeError::ParseError(msg) => format!("Could not read the request: {msg}"),
        }
    }

    /// HTTP status the API layer answers with for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizeError::EmptyInput | SummarizeError::ParseError(_) => 400,
            SummarizeError::ReductionDepthExceeded { .. }
            | SummarizeError::InsufficientContent { .. } => 422,
            SummarizeError::ModelUnavailable(_) | SummarizeError::HttpError(_) => 503,
            SummarizeError::ModelTimeout(_) => 504,
            SummarizeError::ConfigError(_) => 500,
        }
    }
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for SummarizeError {
    fn from(error: anyhow::Error) -> Self {
        SummarizeError::ModelUnavailable(error.to_string())
    }
}
