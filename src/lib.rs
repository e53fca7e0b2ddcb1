//! Trendgate library crate (used by the CLI binary and integration tests).
//!
//! A pre-delivery quality gate for trend digests. It flattens four differently shaped
//! collections into one candidate list, asks an LLM judge to score them in size-bounded
//! batches, and rebuilds the original shapes with only the survivors, each annotated with a
//! short brief.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`QualityGate`], [`GateOutcome`], [`EvaluationStats`] - one filtering run
//! - [`GateConfig`], [`ConfigError`] - environment-backed configuration
//!
//! ## Stages
//! - [`collect_candidates`], [`CandidateItem`], [`CandidateId`], [`Pointer`] - flattening
//! - [`ContentEnricher`], [`ContentFetcher`], [`HttpContentFetcher`] - optional page text
//! - [`BatchJudge`], [`JudgeClient`], [`GenaiJudgeClient`], [`parse_decisions`] - judging
//! - [`compute_kept_ids`] - keep policy
//! - [`rewrite_collections`] - reconstruction
//!
//! ## Data
//! - [`Collections`], [`ReportData`], [`StatGroup`], [`NewTitleSource`], [`TitleEntry`]
//!
//! ## Test/Mock Support
//! [`MockJudgeClient`] and [`MockContentFetcher`] are available behind
//! `#[cfg(any(test, feature = "mock"))]`.

pub mod candidate;
pub mod config;
pub mod constants;
pub mod enrich;
pub mod gate;
pub mod judge;
pub mod merge;
pub mod report;
pub mod rewrite;
pub mod text;

pub use candidate::{
    CandidateId, CandidateIdError, CandidateItem, Pointer, PointerMap, Section, collect_candidates,
};
pub use config::{ConfigError, GateConfig};
#[cfg(any(test, feature = "mock"))]
pub use enrich::MockContentFetcher;
pub use enrich::{ContentEnricher, ContentFetcher, FetchError, HttpContentFetcher, strip_html};
pub use gate::{EvaluationStats, GateError, GateOutcome, QualityGate};
#[cfg(any(test, feature = "mock"))]
pub use judge::MockJudgeClient;
pub use judge::{
    BatchJudge, Decision, DecisionMap, GenaiJudgeClient, JudgeClient, JudgeError, JudgeItem,
    JudgeRequest, extract_json, normalize_brief, parse_decisions,
};
pub use merge::{KeptIds, compute_kept_ids, evaluation_window};
pub use report::{Collections, NewTitleSource, ReportData, StatGroup, TitleEntry};
pub use rewrite::rewrite_collections;
