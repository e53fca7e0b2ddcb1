//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `QUALITY_GATE_*` environment variables
//! (the judge credential is read from `AI_API_KEY`).

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::warn;

use crate::constants::{
    DEFAULT_BATCH_SIZE, DEFAULT_CONTENT_FETCH_CONCURRENCY, DEFAULT_CONTENT_FETCH_TIMEOUT_SECS,
    DEFAULT_MAX_CONTENT_CHARS, DEFAULT_MAX_ITEMS, DEFAULT_MAX_TOKENS, DEFAULT_MIN_SCORE,
    DEFAULT_MODEL, DEFAULT_REASONING_EFFORT, DEFAULT_TIMEOUT_SECS, MAX_FETCH_WORKERS, MAX_SCORE,
    MIN_FETCH_WORKERS,
};

/// Quality gate configuration loaded from environment variables.
///
/// Use [`GateConfig::from_env`] to read overrides on top of defaults. The pipeline treats
/// every field as opaque input; nothing here is re-read during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    /// Master switch. Default: `false`.
    pub enabled: bool,

    /// Judge model identifier. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Credential for the judgment service. The gate is skipped when absent.
    pub api_key: Option<String>,

    /// Minimum score an evaluated item needs to be kept. Default: `60`.
    pub min_score: u8,

    /// Evaluation cap; items past it are kept unjudged. `0` evaluates everything.
    pub max_items: usize,

    /// Items per judgment call. `0` sends one batch.
    pub batch_size: usize,

    /// Per-call timeout for the judgment service.
    pub timeout: Duration,

    /// Output token cap per judgment call.
    pub max_tokens: u32,

    /// Reasoning effort hint (`low`, `medium`, `high`).
    pub reasoning_effort: String,

    /// Fetch page text for each candidate URL before judging.
    pub use_content: bool,

    /// Per-request timeout for content fetches.
    pub content_fetch_timeout: Duration,

    /// Requested enrichment worker count (clamped by [`GateConfig::fetch_workers`]).
    pub content_fetch_concurrency: usize,

    /// Character cap applied to fetched page text.
    pub max_content_chars: usize,

    /// Optional file holding the brief annotation style rules.
    pub brief_prompt_file: Option<PathBuf>,

    /// Logs per-batch request sizes at info level.
    pub debug: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            min_score: DEFAULT_MIN_SCORE,
            max_items: DEFAULT_MAX_ITEMS,
            batch_size: DEFAULT_BATCH_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_tokens: DEFAULT_MAX_TOKENS,
            reasoning_effort: DEFAULT_REASONING_EFFORT.to_string(),
            use_content: false,
            content_fetch_timeout: Duration::from_secs(DEFAULT_CONTENT_FETCH_TIMEOUT_SECS),
            content_fetch_concurrency: DEFAULT_CONTENT_FETCH_CONCURRENCY,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            brief_prompt_file: None,
            debug: false,
        }
    }
}

impl GateConfig {
    const ENV_ENABLED: &'static str = "QUALITY_GATE_ENABLED";
    const ENV_MODEL: &'static str = "QUALITY_GATE_MODEL";
    const ENV_API_KEY: &'static str = "AI_API_KEY";
    const ENV_MIN_SCORE: &'static str = "QUALITY_GATE_MIN_SCORE";
    const ENV_MAX_ITEMS: &'static str = "QUALITY_GATE_MAX_ITEMS";
    const ENV_BATCH_SIZE: &'static str = "QUALITY_GATE_BATCH_SIZE";
    const ENV_TIMEOUT: &'static str = "QUALITY_GATE_TIMEOUT";
    const ENV_MAX_TOKENS: &'static str = "QUALITY_GATE_MAX_TOKENS";
    const ENV_REASONING_EFFORT: &'static str = "QUALITY_GATE_REASONING_EFFORT";
    const ENV_USE_CONTENT: &'static str = "QUALITY_GATE_USE_CONTENT";
    const ENV_CONTENT_FETCH_TIMEOUT: &'static str = "QUALITY_GATE_CONTENT_FETCH_TIMEOUT";
    const ENV_CONTENT_FETCH_CONCURRENCY: &'static str = "QUALITY_GATE_CONTENT_FETCH_CONCURRENCY";
    const ENV_MAX_CONTENT_CHARS: &'static str = "QUALITY_GATE_MAX_CONTENT_CHARS";
    const ENV_BRIEF_PROMPT_FILE: &'static str = "QUALITY_GATE_BRIEF_PROMPT_FILE";
    const ENV_DEBUG: &'static str = "QUALITY_GATE_DEBUG";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let enabled = Self::parse_bool_from_env(Self::ENV_ENABLED, defaults.enabled)?;
        let model = Self::parse_optional_string_from_env(Self::ENV_MODEL).unwrap_or(defaults.model);
        let api_key = Self::parse_optional_string_from_env(Self::ENV_API_KEY);

        let min_score = Self::parse_nonzero_from_env(Self::ENV_MIN_SCORE, u64::from(defaults.min_score))?;
        if min_score > u64::from(MAX_SCORE) {
            return Err(ConfigError::InvalidMinScore {
                value: u32::try_from(min_score).unwrap_or(u32::MAX),
            });
        }

        let max_items = Self::parse_usize_from_env(Self::ENV_MAX_ITEMS, defaults.max_items)?;
        let batch_size = Self::parse_usize_from_env(Self::ENV_BATCH_SIZE, defaults.batch_size)?;
        let timeout = Self::parse_nonzero_from_env(Self::ENV_TIMEOUT, defaults.timeout.as_secs())
            .map(Duration::from_secs)?;
        let max_tokens =
            Self::parse_nonzero_from_env(Self::ENV_MAX_TOKENS, u64::from(defaults.max_tokens))?;
        let reasoning_effort = Self::parse_optional_string_from_env(Self::ENV_REASONING_EFFORT)
            .map(|v| v.to_lowercase())
            .unwrap_or(defaults.reasoning_effort);

        let use_content = Self::parse_bool_from_env(Self::ENV_USE_CONTENT, defaults.use_content)?;
        let content_fetch_timeout = Self::parse_nonzero_from_env(
            Self::ENV_CONTENT_FETCH_TIMEOUT,
            defaults.content_fetch_timeout.as_secs(),
        )
        .map(Duration::from_secs)?;
        let content_fetch_concurrency = Self::parse_nonzero_usize_from_env(
            Self::ENV_CONTENT_FETCH_CONCURRENCY,
            defaults.content_fetch_concurrency,
        )?;
        let max_content_chars = Self::parse_nonzero_usize_from_env(
            Self::ENV_MAX_CONTENT_CHARS,
            defaults.max_content_chars,
        )?;

        let brief_prompt_file =
            Self::parse_optional_string_from_env(Self::ENV_BRIEF_PROMPT_FILE).map(PathBuf::from);
        let debug = Self::parse_bool_from_env(Self::ENV_DEBUG, defaults.debug)?;

        Ok(Self {
            enabled,
            model,
            api_key,
            min_score: u8::try_from(min_score).unwrap_or(MAX_SCORE),
            max_items,
            batch_size,
            timeout,
            max_tokens: u32::try_from(max_tokens).unwrap_or(u32::MAX),
            reasoning_effort,
            use_content,
            content_fetch_timeout,
            content_fetch_concurrency,
            max_content_chars,
            brief_prompt_file,
            debug,
        })
    }

    /// Validates basic invariants (does not touch the filesystem beyond a metadata check).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_score > MAX_SCORE {
            return Err(ConfigError::InvalidMinScore {
                value: u32::from(self.min_score),
            });
        }

        if self.model.trim().is_empty() {
            return Err(ConfigError::EmptyModel);
        }

        if !matches!(self.reasoning_effort.as_str(), "low" | "medium" | "high") {
            return Err(ConfigError::InvalidReasoningEffort {
                value: self.reasoning_effort.clone(),
            });
        }

        if let Some(ref path) = self.brief_prompt_file
            && path.exists()
            && !path.is_file()
        {
            return Err(ConfigError::NotAFile { path: path.clone() });
        }

        Ok(())
    }

    /// Returns the credential if one is configured and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Enrichment worker count, clamped to `[1, 16]`.
    pub fn fetch_workers(&self) -> usize {
        self.content_fetch_concurrency
            .clamp(MIN_FETCH_WORKERS, MAX_FETCH_WORKERS)
    }

    /// Loads the brief annotation rules from [`GateConfig::brief_prompt_file`].
    ///
    /// Returns an empty string when no file is configured or it cannot be read.
    pub fn load_brief_prompt(&self) -> String {
        match self.brief_prompt_file.as_deref() {
            Some(path) => read_prompt_file(path),
            None => String::new(),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "" => Ok(default),
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_u64_from_env(var_name: &'static str) -> Result<Option<u64>, ConfigError> {
        match Self::parse_optional_string_from_env(var_name) {
            Some(value) => value
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidNumber {
                    name: var_name,
                    value,
                    source: e,
                }),
            None => Ok(None),
        }
    }

    /// Zero is treated like "unset" for settings where zero has no meaning.
    fn parse_nonzero_from_env(var_name: &'static str, default: u64) -> Result<u64, ConfigError> {
        Ok(Self::parse_u64_from_env(var_name)?
            .filter(|v| *v > 0)
            .unwrap_or(default))
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        Ok(Self::parse_u64_from_env(var_name)?
            .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
            .unwrap_or(default))
    }

    fn parse_nonzero_usize_from_env(
        var_name: &'static str,
        default: usize,
    ) -> Result<usize, ConfigError> {
        Ok(Self::parse_u64_from_env(var_name)?
            .filter(|v| *v > 0)
            .map(|v| usize::try_from(v).unwrap_or(usize::MAX))
            .unwrap_or(default))
    }
}

fn read_prompt_file(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Brief prompt file unreadable, using built-in rules");
            String::new()
        }
    }
}
