//! Cross-cutting, shared constants.
//!
//! Defaults here are the values [`GateConfig`](crate::config::GateConfig) falls back to when
//! the environment leaves a setting unset (or sets it to zero where zero is meaningless).

/// Judge model used when `QUALITY_GATE_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Minimum score (0-100) an evaluated item needs to survive.
pub const DEFAULT_MIN_SCORE: u8 = 60;

/// Upper bound of items ever sent for judgment. `0` means "evaluate everything".
pub const DEFAULT_MAX_ITEMS: usize = 30;

/// Items per judgment call. `0` means "one batch".
pub const DEFAULT_BATCH_SIZE: usize = 40;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_TOKENS: u32 = 900;
pub const DEFAULT_REASONING_EFFORT: &str = "low";

pub const DEFAULT_CONTENT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONTENT_FETCH_CONCURRENCY: usize = 6;
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 4000;

/// Hard bounds for the enrichment worker pool.
pub const MIN_FETCH_WORKERS: usize = 1;
pub const MAX_FETCH_WORKERS: usize = 16;

/// Cleaned page text shorter than this carries no usable signal.
pub const MIN_CONTENT_CHARS: usize = 200;

/// Brief annotations are hard-capped to this many characters.
pub const MAX_BRIEF_CHARS: usize = 80;

/// Upper end of the judge's scoring scale.
pub const MAX_SCORE: u8 = 100;
