//! Process-wide summarization model.
//!
//! The model is built on first use and then shared read-only by every request
//! for the life of the process. A failed build is not cached, so the next
//! request tries again.

use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{error, info};

use super::client::LlmClient;
use super::lead::LeadModel;
use super::traits::SummaryModel;
use crate::core::config::{AppConfig, Backend};
use crate::errors::SummarizeError;

static SHARED_MODEL: OnceCell<Arc<dyn SummaryModel>> = OnceCell::new();

/// Return the shared model, building it from `config` on first use.
///
/// # Errors
///
/// Returns `ModelUnavailable` when the configured backend cannot be initialized.
pub fn shared_model(config: &AppConfig) -> Result<Arc<dyn SummaryModel>, SummarizeError> {
    SHARED_MODEL
        .get_or_try_init(|| build_model(config))
        .map(Arc::clone)
}

/// Build a fresh model for `config` without touching the shared instance.
///
/// # Errors
///
/// Returns `ModelUnavailable` when the configured backend cannot be initialized.
pub fn build_model(config: &AppConfig) -> Result<Arc<dyn SummaryModel>, SummarizeError> {
    match config.backend {
        Backend::Lead => {
            info!("Initialized extractive lead-sentence model");
            Ok(Arc::new(LeadModel))
        }
        Backend::OpenAi => {
            let client = LlmClient::from_config(config).map_err(|e| {
                error!("Failed to initialize OpenAI model: {:#}", e);
                SummarizeError::from(e)
            })?;
            info!(model = %config.model_name(), "Initialized OpenAI summarization model");
            Ok(Arc::new(client))
        }
    }
}
