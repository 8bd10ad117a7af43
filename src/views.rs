//! HTML pages for the article form.

use crate::api::types::SummaryResponse;

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#222}\
textarea{width:100%;min-height:18rem;font:inherit;padding:.5rem}\
button{background:#28a745;color:#fff;border:none;border-radius:8px;font-weight:bold;padding:.6rem 1.4rem;cursor:pointer}\
button:hover{background:#218838}\
.error{background:#fdecea;border-left:4px solid #d93025;padding:.6rem 1rem}\
.stats{display:grid;grid-template-columns:1fr 1fr;gap:.4rem 2rem}\
footer{margin-top:3rem;color:#666;font-size:.8em;text-align:center}";

/// Escape text for safe inclusion in HTML element content or attribute values.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>Article Summarizer</title><style>{STYLE}</style></head><body>\
<h1>Article Summarizer</h1>\
<p>Paste a full blog post or news article below and get a 3-sentence summary.</p>\
{body}<footer>Hierarchical summarization: sections are summarized, combined, and condensed to three sentences.</footer>\
</body></html>"
    )
}

fn form(prefill: &str) -> String {
    format!(
        "<form method=\"post\" action=\"/summarize\">\
<label for=\"text\">Article text</label>\
<textarea id=\"text\" name=\"text\" placeholder=\"Paste your full blog post, news article, or research paper here...\">{}</textarea>\
<p><button type=\"submit\">Summarize Article</button></p></form>",
        escape_html(prefill)
    )
}

/// Landing page with an empty form.
#[must_use]
pub fn render_form_page(model_name: &str) -> String {
    page(&format!(
        "<p><small>Powered by {}</small></p>{}",
        escape_html(model_name),
        form("")
    ))
}

/// Form page with a user-visible error above it; keeps the submitted text.
#[must_use]
pub fn render_error_page(message: &str, prefill: &str) -> String {
    page(&format!(
        "<div class=\"error\" role=\"alert\">{}</div>{}",
        escape_html(message),
        form(prefill)
    ))
}

/// Result page listing the three sentences, statistics, and pipeline insights.
#[must_use]
pub fn render_result_page(response: &SummaryResponse, original: &str) -> String {
    let sentences: String = response
        .summary
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| format!("<li>{}</li>", escape_html(s)))
        .collect();

    let insights: String = response
        .insights
        .iter()
        .map(|s| format!("<li>{}</li>", escape_html(s)))
        .collect();

    let stats = &response.stats;
    #[allow(clippy::cast_precision_loss)]
    let elapsed_secs = stats.elapsed_ms as f64 / 1000.0;

    page(&format!(
        "<h2>3-Sentence Summary</h2><ul>{sentences}</ul>\
<h3>Analysis Details</h3><div class=\"stats\">\
<div>Original: {orig} words</div><div>Compression: {ratio:.1}%</div>\
<div>Summary: {summ} words</div><div>Processing: {elapsed_secs:.1}s</div></div>\
<h4>What the model did</h4><ul>{insights}</ul>\
<p><small>Model: {model} ({desc})</small></p>{form}",
        orig = stats.original_words,
        ratio = stats.compression_percent(),
        summ = stats.summary_words,
        model = escape_html(&response.model.name),
        desc = escape_html(&response.model.description),
        form = form(original),
    ))
}
