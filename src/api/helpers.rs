//! Response builders shared by the API handler.

use serde_json::{Value, json};

use super::types::ResponseFormat;
use crate::errors::SummarizeError;
use crate::views;

/// Returns a JSON response with the given status code.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body.to_string()
    })
}

/// Returns an HTML page response with the given status code.
#[must_use]
pub fn html_response(status_code: u16, html: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "text/html; charset=utf-8" },
        "body": html
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Renders a user-visible failure in the caller's format.
#[must_use]
pub fn failure(format: ResponseFormat, status_code: u16, message: &str, prefill: &str) -> Value {
    match format {
        ResponseFormat::Json => err_response(status_code, message),
        ResponseFormat::Html => html_response(status_code, &views::render_error_page(message, prefill)),
    }
}

/// Renders a pipeline error using its status code and user message.
#[must_use]
pub fn error_for(format: ResponseFormat, error: &SummarizeError, prefill: &str) -> Value {
    failure(format, error.status_code(), &error.user_message(), prefill)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn err_response_wraps_message() {
        let v = err_response(400, "Missing body");
        assert_eq!(v["statusCode"], 400);
        let body: Value = serde_json::from_str(v["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["error"], "Missing body");
    }

    #[test]
    fn error_for_uses_taxonomy_status() {
        let v = error_for(
            ResponseFormat::Json,
            &SummarizeError::ModelUnavailable("down".into()),
            "",
        );
        assert_eq!(v["statusCode"], 503);
        assert!(!v["body"].as_str().unwrap().contains("down"));
    }

    #[test]
    fn html_failure_is_a_page() {
        let v = failure(ResponseFormat::Html, 422, "Too short", "abc");
        assert_eq!(v["headers"]["Content-Type"], "text/html; charset=utf-8");
        assert!(v["body"].as_str().unwrap().contains("Too short"));
    }
}
