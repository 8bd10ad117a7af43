#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use article_tldr::ai::SummaryModel;
use article_tldr::core::models::LengthBounds;
use article_tldr::errors::SummarizeError;
use async_trait::async_trait;

/// One paragraph of ten short sentences, 439 characters long.
pub fn paragraph(p: usize) -> String {
    (0..10)
        .map(|i| format!("Paragraph {p} sentence {i} talks about topic {p}."))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `count` paragraphs separated by blank lines.
pub fn article(count: usize) -> String {
    (1..=count)
        .map(paragraph)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

type Responder = dyn Fn(usize, &str) -> Result<String, SummarizeError> + Send + Sync;

/// Model that records every input and answers with a scripted function of
/// (call index, input).
pub struct ScriptedModel {
    calls: Mutex<Vec<String>>,
    respond: Box<Responder>,
    delay: Option<Duration>,
}

impl ScriptedModel {
    pub fn new(
        respond: impl Fn(usize, &str) -> Result<String, SummarizeError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
            delay: None,
        }
    }

    pub fn echo() -> Self {
        Self::new(|_, input| Ok(input.to_string()))
    }

    pub fn constant(output: &'static str) -> Self {
        Self::new(move |_, _| Ok(output.to_string()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn summarize(&self, text: &str, _bounds: LengthBounds) -> Result<String, SummarizeError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(text.to_string());
            calls.len() - 1
        };
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.respond)(index, text)
    }
}
