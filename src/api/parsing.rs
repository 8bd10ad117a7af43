use base64::{Engine as _, engine::general_purpose};
use percent_encoding::percent_decode_str;
use serde_json::Value;

use super::types::{ArticleRequest, ResponseFormat, SummarizeRequestBody};
use crate::errors::SummarizeError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// HTTP method from either an HTTP API (v2) or REST API (v1) event.
#[must_use]
pub fn request_method(payload: &Value) -> &str {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .unwrap_or("GET")
}

#[must_use]
pub fn request_path(payload: &Value) -> &str {
    v_str(payload, &["rawPath"])
        .or_else(|| v_str(payload, &["path"]))
        .unwrap_or("/")
}

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// `+` is a space in form encoding; a literal plus arrives as `%2B`.
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.to_string())
        .map_err(|e| format!("Failed to decode URL component: {}", e))
}

/// Value of `name` in a form-encoded body, if present.
pub fn form_field(body: &str, name: &str) -> Result<Option<String>, SummarizeError> {
    for pair in body.split('&') {
        let (key, raw_val) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            return decode_url_component(raw_val)
                .map(Some)
                .map_err(SummarizeError::ParseError);
        }
    }
    Ok(None)
}

/// Request body as text, decoding base64 bodies.
pub fn extract_body(payload: &Value) -> Result<String, SummarizeError> {
    let body = payload
        .get("body")
        .and_then(|b| b.as_str())
        .ok_or_else(|| SummarizeError::ParseError("Missing body".to_string()))?;

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = general_purpose::STANDARD
        .decode(body)
        .map_err(|e| SummarizeError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| SummarizeError::ParseError(format!("Body is not UTF-8: {e}")))
}

/// Form submissions get HTML pages back; everything else gets JSON.
#[must_use]
pub fn response_format(payload: &Value) -> ResponseFormat {
    let is_form = payload
        .get("headers")
        .and_then(|h| get_header_value(h, "Content-Type"))
        .is_some_and(|ct| {
            ct.to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        });
    if is_form {
        ResponseFormat::Html
    } else {
        ResponseFormat::Json
    }
}

/// Parse the article submission from a JSON or form-encoded request.
pub fn parse_article_request(payload: &Value) -> Result<ArticleRequest, SummarizeError> {
    let format = response_format(payload);
    let body = extract_body(payload)?;

    if format == ResponseFormat::Html {
        let text = form_field(&body, "text")?
            .ok_or_else(|| SummarizeError::ParseError("Missing text field".to_string()))?;
        return Ok(ArticleRequest {
            text,
            format: ResponseFormat::Html,
        });
    }

    let parsed: SummarizeRequestBody = serde_json::from_str(&body)
        .map_err(|e| SummarizeError::ParseError(format!("Invalid JSON body: {e}")))?;
    Ok(ArticleRequest {
        text: parsed.text,
        format: ResponseFormat::Json,
    })
}
