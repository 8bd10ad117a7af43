/// Article TLDR - condenses a long article into exactly three sentences.
///
/// Summarization is hierarchical so articles longer than the model's input
/// budget can still be handled:
/// 1. The article is split into chunks on paragraph (then sentence) boundaries
/// 2. Each chunk is summarized and the summaries are concatenated in order
/// 3. The combined text gets one final summary, or is reduced again if it is
///    still over budget
/// 4. The first three sentences of the final summary are returned
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
///
/// use article_tldr::ai::LeadModel;
/// use article_tldr::core::config::SummarizerConfig;
/// use article_tldr::core::models::Document;
/// use article_tldr::pipeline::HierarchicalSummarizer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     article_tldr::setup_logging();
///
///     let summarizer =
///         HierarchicalSummarizer::new(Arc::new(LeadModel), SummarizerConfig::default());
///     let summary = summarizer
///         .reduce(&Document::new("A long article. It has many sentences. And more."))
///         .await?;
///
///     for sentence in summary.sentences() {
///         println!("{sentence}");
///     }
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod utils;
pub mod views;

pub use errors::SummarizeError;
pub use pipeline::HierarchicalSummarizer;

#[cfg(feature = "debug-logs")]
const DEFAULT_LOG_FILTER: &str = "debug";
#[cfg(not(feature = "debug-logs"))]
const DEFAULT_LOG_FILTER: &str = "info";

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// `RUST_LOG` overrides the default level. Calling this more than once is a no-op.
///
/// # Example
///
/// ```
/// article_tldr::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
