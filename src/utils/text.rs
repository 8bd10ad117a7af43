use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SummarizeError;

// Wide enough that html2text never hard-wraps a paragraph.
const HTML_RENDER_WIDTH: usize = 10_000;

static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)</?(html|body|article|section|main|p|div|br|h[1-6]|li|ul|ol|span|a)(\s[^>]*)?/?>")
        .expect("static regex compile")
});

/// Whether pasted text looks like an HTML fragment rather than prose.
#[must_use]
pub fn looks_like_html(text: &str) -> bool {
    HTML_TAG_RE.find_iter(text).take(2).count() >= 2
}

/// Convert pasted article input to plain prose, rendering HTML when present.
///
/// # Errors
///
/// Returns `ParseError` when the HTML cannot be rendered.
pub fn normalize_article(raw: &str) -> Result<String, SummarizeError> {
    let text = if looks_like_html(raw) {
        html2text::from_read(raw.as_bytes(), HTML_RENDER_WIDTH)
            .map_err(|e| SummarizeError::ParseError(format!("Failed to render HTML: {e}")))?
    } else {
        raw.to_string()
    };
    Ok(text.replace("\r\n", "\n").trim().to_string())
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_html() {
        assert!(looks_like_html("<p>One</p><p>Two</p>"));
        assert!(looks_like_html("<DIV class=\"x\">Hi</DIV>"));
        assert!(!looks_like_html("Use a < b and b > c in math."));
        assert!(!looks_like_html("Plain text article."));
    }

    #[test]
    fn plain_text_passes_through_trimmed() {
        let out = normalize_article("  Hello world.\r\n\r\nSecond.  ").unwrap();
        assert_eq!(out, "Hello world.\n\nSecond.");
    }

    #[test]
    fn html_is_rendered_to_text() {
        let out = normalize_article("<p>First paragraph.</p><p>Second paragraph.</p>").unwrap();
        assert!(out.contains("First paragraph."));
        assert!(out.contains("Second paragraph."));
        assert!(!out.contains("<p>"));
    }
}
