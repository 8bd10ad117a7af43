use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};

use crate::core::models::LengthBounds;

/// Hard cap on characters of article text placed in one prompt.
pub const MAX_PROMPT_INPUT_CHARS: usize = 48_000;

/// Drop control characters other than line breaks and tabs, then hard-truncate.
#[must_use]
pub fn sanitize_article_text(raw: &str) -> String {
    raw.chars()
        .filter(|&c| !c.is_control() || c == '\n' || c == '\t')
        .take(MAX_PROMPT_INPUT_CHARS)
        .collect()
}

/// Build the chat prompt asking the model for a plain-prose summary of `text`.
#[must_use]
pub fn build_prompt(text: &str, bounds: LengthBounds) -> Vec<ChatCompletionMessage> {
    vec![
        ChatCompletionMessage {
            role: MessageRole::system,
            content: Content::Text(format!(
                "You are a news and blog summarizer. \
                RULES: \
                1. Output ONLY the summary as plain prose sentences (no headings, bullets, or preamble). \
                2. Use between {min} and {max} words. \
                3. Only state facts present in the input; never invent details. \
                4. Write complete sentences ending in terminal punctuation.",
                min = bounds.min_len,
                max = bounds.max_len,
            )),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
        ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(sanitize_article_text(text)),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_paragraph_breaks() {
        let raw = "Para one.\u{0000}\n\nPara\ttwo.\u{007F}";
        assert_eq!(sanitize_article_text(raw), "Para one.\n\nPara\ttwo.");
    }

    #[test]
    fn sanitize_truncates() {
        let long = "a".repeat(MAX_PROMPT_INPUT_CHARS + 10);
        assert_eq!(sanitize_article_text(&long).len(), MAX_PROMPT_INPUT_CHARS);
    }

    #[test]
    fn prompt_carries_bounds_and_text() {
        let prompt = build_prompt("Body text.", LengthBounds { min_len: 12, max_len: 90 });
        assert_eq!(prompt.len(), 2);
        match &prompt[0].content {
            Content::Text(t) => assert!(t.contains("between 12 and 90 words")),
            Content::ImageUrl(_) => panic!("system prompt should be text"),
        }
        match &prompt[1].content {
            Content::Text(t) => assert_eq!(t, "Body text."),
            Content::ImageUrl(_) => panic!("user prompt should be text"),
        }
    }
}
