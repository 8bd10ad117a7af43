//! LLM (`OpenAI`) backed summarization model.
//!
//! Sends one Responses API request per summarize call. There are no retries: a
//! failed call surfaces as `ModelUnavailable` and fails the current request.

use anyhow::Context;
use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info};

use super::prompt_builder::build_prompt;
use super::traits::SummaryModel;
use crate::core::config::AppConfig;
use crate::core::models::LengthBounds;
use crate::errors::SummarizeError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);
const MIN_OUTPUT_TOKENS: usize = 16;
const TOKEN_BUFFER: usize = 64;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / 4 + 1
}

/// Output token ceiling for a call: the requested maximum plus headroom to finish the last sentence.
#[must_use]
pub fn max_output_tokens(bounds: LengthBounds) -> usize {
    (bounds.max_len + TOKEN_BUFFER).max(MIN_OUTPUT_TOKENS)
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be constructed (e.g. TLS backend init).
    pub fn new(api_key: String, org_id: Option<String>, model_name: String) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build OpenAI HTTP client")?;

        Ok(Self {
            http,
            api_key,
            org_id,
            model_name,
            base_url: crate::core::config::DEFAULT_OPENAI_BASE_URL.to_string(),
        })
    }

    /// # Errors
    ///
    /// Fails when no API key is configured or the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let api_key = config
            .openai_api_key
            .clone()
            .context("OPENAI_API_KEY is not set")?;
        let client = Self::new(
            api_key,
            config.openai_org_id.clone(),
            config.model_name().to_string(),
        )?;
        Ok(client.with_base_url(&config.openai_base_url))
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    fn headers(&self) -> Result<HeaderMap, SummarizeError> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| SummarizeError::ConfigError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        if let Some(org) = &self.org_id {
            let org_value = HeaderValue::from_str(org).map_err(|e| {
                SummarizeError::ConfigError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        Ok(headers)
    }

    #[must_use]
    pub fn request_body(&self, prompt: &[ChatCompletionMessage], bounds: LengthBounds) -> Value {
        json!({
            "model": self.model_name,
            "input": build_responses_input_from_prompt(prompt),
            "max_output_tokens": max_output_tokens(bounds)
        })
    }
}

#[async_trait]
impl SummaryModel for LlmClient {
    fn name(&self) -> &str {
        &self.model_name
    }

    fn description(&self) -> &str {
        "OpenAI Responses API"
    }

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError> {
        let prompt = build_prompt(text, bounds);

        #[cfg(feature = "debug-logs")]
        info!("Using summarization prompt:\n{:?}", prompt);

        info!(
            estimated_input_tokens = estimate_tokens(text),
            min_len = bounds.min_len,
            max_len = bounds.max_len,
            model = %self.model_name,
            "Requesting summary"
        );

        let response = self
            .http
            .post(self.responses_url())
            .headers(self.headers()?)
            .json(&self.request_body(&prompt, bounds))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(SummarizeError::ModelUnavailable(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            SummarizeError::ModelUnavailable(format!("Failed to parse OpenAI response: {e}"))
        })?;

        let summary = extract_output_text(&response_json)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| SummarizeError::ModelUnavailable("No text in response".to_string()))?;

        debug!(summary_chars = summary.chars().count(), "Received summary");
        Ok(summary)
    }
}

/// Build Responses API input payload from a chat-style prompt.
/// - Filters out assistant messages (Responses treats assistant content as output)
/// - Emits typed `input_text` parts
pub(crate) fn build_responses_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .filter(|m| !matches!(m.role, MessageRole::assistant))
        .filter_map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
                MessageRole::assistant => "assistant",
            };

            match &m.content {
                Content::Text(t) => Some(json!({
                    "role": role_str,
                    "content": [{ "type": "input_text", "text": t }]
                })),
                Content::ImageUrl(_) => None,
            }
        })
        .collect()
}

/// Pull the generated text out of a Responses API payload.
///
/// Prefers the top-level `output_text` convenience field and falls back to
/// joining every `output_text` content part.
pub(crate) fn extract_output_text(response_json: &Value) -> Option<String> {
    if let Some(text) = response_json.get("output_text").and_then(|v| v.as_str()) {
        return Some(text.to_string());
    }

    let mut collected: Vec<String> = Vec::new();
    let items = response_json.get("output").and_then(|o| o.as_array())?;
    for item in items {
        let Some(parts) = item.get("content").and_then(|c| c.as_array()) else {
            continue;
        };
        for p in parts {
            let is_output_text = p
                .get("type")
                .and_then(|t| t.as_str())
                .is_some_and(|t| t == "output_text");
            if !is_output_text {
                continue;
            }
            if let Some(s) = p.get("text").and_then(|t| t.as_str()) {
                collected.push(s.to_string());
            } else if let Some(s) = p
                .get("text")
                .and_then(|t| t.get("value"))
                .and_then(|v| v.as_str())
            {
                collected.push(s.to_string());
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}
