//! API Lambda handler for the article form and the summarize endpoint.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::helpers;
use super::parsing;
use super::types::{ModelInfo, ResponseFormat, SummaryResponse, insights};
use crate::ai::{SummaryModel, registry};
use crate::core::config::AppConfig;
use crate::core::models::{Document, SummaryStats};
use crate::errors::SummarizeError;
use crate::pipeline::HierarchicalSummarizer;
use crate::utils::text::{normalize_article, word_count};
use crate::views;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails: configuration problems and every request-level failure are
/// answered with an error response payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    match AppConfig::from_env() {
        Ok(config) => Ok(handle_request(&config, &event.payload).await),
        Err(e) => Ok(config_failure(&e, &event.payload)),
    }
}

/// Response for a request that arrived while the configuration is invalid.
#[must_use]
pub fn config_failure(message: &str, payload: &Value) -> Value {
    error!("Config error: {}", message);
    let err = SummarizeError::ConfigError(message.to_string());
    helpers::error_for(parsing::response_format(payload), &err, "")
}

/// Route one HTTP event.
pub async fn handle_request(config: &AppConfig, payload: &Value) -> Value {
    let method = parsing::request_method(payload).to_ascii_uppercase();
    let path = parsing::request_path(payload);
    info!(method = %method, path = %path, "Request received");

    match (method.as_str(), path.trim_end_matches('/')) {
        ("GET", "") => {
            helpers::html_response(200, &views::render_form_page(config.model_name_for_display()))
        }
        ("POST", "/summarize") => {
            let article = match parsing::parse_article_request(payload) {
                Ok(a) => a,
                Err(e) => {
                    warn!("Rejected request body: {}", e);
                    return helpers::error_for(parsing::response_format(payload), &e, "");
                }
            };
            let model = match registry::shared_model(config) {
                Ok(m) => m,
                Err(e) => {
                    error!("Model initialization failed: {}", e);
                    return helpers::error_for(article.format, &e, &article.text);
                }
            };
            summarize_article(config, model, &article.text, article.format).await
        }
        ("GET" | "POST", _) => helpers::err_response(404, "Not found"),
        _ => helpers::err_response(405, "Method not allowed"),
    }
}

/// Validate the submitted text, run the pipeline, and render the outcome.
pub async fn summarize_article(
    config: &AppConfig,
    model: Arc<dyn SummaryModel>,
    raw_text: &str,
    format: ResponseFormat,
) -> Value {
    let request_id = Uuid::new_v4().to_string();

    let text = match normalize_article(raw_text) {
        Ok(t) => t,
        Err(e) => return helpers::error_for(format, &e, raw_text),
    };

    if text.is_empty() {
        return helpers::failure(format, 400, "Please paste some text to summarize!", raw_text);
    }

    let words = word_count(&text);
    if words < config.min_input_words {
        info!(request_id = %request_id, words, "Article below minimum length");
        return helpers::failure(
            format,
            422,
            "Article seems quite short. Try a longer article for better results!",
            raw_text,
        );
    }

    let model_info = ModelInfo {
        name: model.name().to_string(),
        description: model.description().to_string(),
    };
    let document = Document::new(text);
    let summarizer = HierarchicalSummarizer::new(model, config.pipeline());

    let started = Instant::now();
    let reduction = match summarizer.run(&document).await {
        Ok(r) => r,
        Err(e) => {
            error!(request_id = %request_id, "Failed to generate summary: {}", e);
            return helpers::error_for(format, &e, raw_text);
        }
    };
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    let response = SummaryResponse {
        request_id,
        generated_at: Utc::now().to_rfc3339(),
        summary: reduction.summary.sentences().clone(),
        stats: SummaryStats::compute(&document, &reduction, elapsed_ms),
        insights: insights(&reduction),
        model: model_info,
    };
    info!(
        request_id = %response.request_id,
        original_words = response.stats.original_words,
        summary_words = response.stats.summary_words,
        elapsed_ms,
        "Summary generated"
    );

    match format {
        ResponseFormat::Html => {
            helpers::html_response(200, &views::render_result_page(&response, raw_text))
        }
        ResponseFormat::Json => match serde_json::to_value(&response) {
            Ok(body) => helpers::json_response(200, &body),
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                helpers::err_response(500, "Failed to serialize response")
            }
        },
    }
}
