//! Summarization model adapter and its backends

pub mod client;
pub mod lead;
pub mod prompt_builder;
pub mod registry;
pub mod traits;

// Re-export main types for convenience
pub use client::{LlmClient, estimate_tokens};
pub use lead::LeadModel;
pub use registry::shared_model;
pub use traits::SummaryModel;
