use std::env;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Which model backend answers summarize calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    OpenAi,
    /// Offline extractive backend.
    Lead,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Backend::OpenAi),
            "lead" => Ok(Backend::Lead),
            other => Err(format!("unknown backend '{other}' (expected openai or lead)")),
        }
    }
}

/// What the sentence extractor does when fewer than three sentences come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Pad with empty slots.
    #[default]
    Lenient,
    /// Fail with `InsufficientContent`.
    Strict,
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(Strictness::Lenient),
            "strict" => Ok(Strictness::Strict),
            other => Err(format!(
                "unknown strictness '{other}' (expected lenient or strict)"
            )),
        }
    }
}

/// Knobs for the chunk/reduce/extract pipeline.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Character budget per chunk.
    pub chunk_max_chars: usize,
    /// Largest combined text handed to the model in one final call.
    pub input_budget_chars: usize,
    /// Maximum number of summarize-and-recombine passes.
    pub max_depth: usize,
    pub strictness: Strictness,
    /// Per model call; `None` waits indefinitely.
    pub model_timeout: Option<Duration>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            chunk_max_chars: 1000,
            input_budget_chars: 2000,
            max_depth: 5,
            strictness: Strictness::Lenient,
            model_timeout: Some(Duration::from_secs(120)),
        }
    }
}

impl SummarizerConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_max_chars == 0 {
            return Err("CHUNK_MAX_CHARS must be greater than 0".to_string());
        }
        if self.input_budget_chars == 0 {
            return Err("MODEL_INPUT_BUDGET_CHARS must be greater than 0".to_string());
        }
        if self.chunk_max_chars > self.input_budget_chars {
            return Err(format!(
                "CHUNK_MAX_CHARS ({}) must not exceed MODEL_INPUT_BUDGET_CHARS ({})",
                self.chunk_max_chars, self.input_budget_chars
            ));
        }
        if self.max_depth == 0 {
            return Err("MAX_REDUCTION_DEPTH must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: Backend,
    pub openai_api_key: Option<String>,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: String,
    pub chunk_max_chars: usize,
    pub input_budget_chars: usize,
    pub max_reduction_depth: usize,
    pub strictness: Strictness,
    pub model_timeout_secs: u64,
    /// Articles shorter than this are rejected with a warning before any model call.
    pub min_input_words: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend = match env::var("SUMMARIZER_BACKEND") {
            Ok(raw) => raw.parse::<Backend>()?,
            Err(_) => Backend::OpenAi,
        };

        let openai_api_key = env::var("OPENAI_API_KEY").ok();
        if backend == Backend::OpenAi && openai_api_key.is_none() {
            return Err("OPENAI_API_KEY: required when SUMMARIZER_BACKEND=openai".to_string());
        }

        let base_raw =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        Url::parse(&base_raw).map_err(|e| format!("OPENAI_BASE_URL: {}", e))?;
        let openai_base_url = base_raw.trim_end_matches('/').to_string();

        let strictness = match env::var("SUMMARY_STRICTNESS") {
            Ok(raw) => raw.parse::<Strictness>()?,
            Err(_) => Strictness::Lenient,
        };

        let defaults = SummarizerConfig::default();
        let config = Self {
            backend,
            openai_api_key,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
            openai_base_url,
            chunk_max_chars: env_usize("CHUNK_MAX_CHARS", defaults.chunk_max_chars)?,
            input_budget_chars: env_usize("MODEL_INPUT_BUDGET_CHARS", defaults.input_budget_chars)?,
            max_reduction_depth: env_usize("MAX_REDUCTION_DEPTH", defaults.max_depth)?,
            strictness,
            model_timeout_secs: env_usize("MODEL_TIMEOUT_SECS", 120)? as u64,
            min_input_words: env_usize("MIN_INPUT_WORDS", 50)?,
        };
        config.pipeline().validate()?;
        Ok(config)
    }

    /// Offline configuration backed by the extractive model.
    #[must_use]
    pub fn lead() -> Self {
        let defaults = SummarizerConfig::default();
        Self {
            backend: Backend::Lead,
            openai_api_key: None,
            openai_org_id: None,
            openai_model: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            chunk_max_chars: defaults.chunk_max_chars,
            input_budget_chars: defaults.input_budget_chars,
            max_reduction_depth: defaults.max_depth,
            strictness: defaults.strictness,
            model_timeout_secs: 120,
            min_input_words: 50,
        }
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    /// Name of the model the configured backend will run.
    #[must_use]
    pub fn model_name_for_display(&self) -> &str {
        match self.backend {
            Backend::OpenAi => self.model_name(),
            Backend::Lead => "lead-sentences",
        }
    }

    #[must_use]
    pub fn pipeline(&self) -> SummarizerConfig {
        SummarizerConfig {
            chunk_max_chars: self.chunk_max_chars,
            input_budget_chars: self.input_budget_chars,
            max_depth: self.max_reduction_depth,
            strictness: self.strictness,
            model_timeout: (self.model_timeout_secs > 0)
                .then(|| Duration::from_secs(self.model_timeout_secs)),
        }
    }
}

fn env_usize(name: &str, default: usize) -> Result<usize, String> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("{}: {}", name, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_and_strictness() {
        assert_eq!("OpenAI".parse::<Backend>().unwrap(), Backend::OpenAi);
        assert_eq!(" lead ".parse::<Backend>().unwrap(), Backend::Lead);
        assert!("t5".parse::<Backend>().is_err());
        assert_eq!("STRICT".parse::<Strictness>().unwrap(), Strictness::Strict);
        assert!("loose".parse::<Strictness>().is_err());
    }

    #[test]
    fn zero_budgets_are_rejected() {
        let mut cfg = SummarizerConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.chunk_max_chars = 0;
        assert!(cfg.validate().unwrap_err().contains("CHUNK_MAX_CHARS"));

        let cfg = SummarizerConfig {
            max_depth: 0,
            ..SummarizerConfig::default()
        };
        assert!(cfg.validate().unwrap_err().contains("MAX_REDUCTION_DEPTH"));
    }

    #[test]
    fn chunk_budget_must_fit_input_budget() {
        let cfg = SummarizerConfig {
            chunk_max_chars: 1200,
            input_budget_chars: 60,
            ..SummarizerConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("must not exceed MODEL_INPUT_BUDGET_CHARS"));

        let cfg = SummarizerConfig {
            chunk_max_chars: 60,
            input_budget_chars: 60,
            ..SummarizerConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_timeout_disables_deadline() {
        let mut cfg = AppConfig::lead();
        cfg.model_timeout_secs = 0;
        assert!(cfg.pipeline().model_timeout.is_none());
        assert_eq!(cfg.model_name(), DEFAULT_OPENAI_MODEL);
    }
}
