use async_trait::async_trait;

use crate::core::models::LengthBounds;
use crate::errors::SummarizeError;

/// Boundary to an opaque text-to-text summarization model.
///
/// Length bounds are advisory; callers must accept output of any length.
/// Implementations are stateless after construction and shared read-only.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Model identifier shown to users.
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Summarize `text`, aiming for a length inside `bounds`.
    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError>;
}
