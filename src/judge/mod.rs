//! Batch judgment against the external LLM judge.
//!
//! Candidates are split into contiguous batches and sent one batch at a time. Each call must
//! come back as a JSON array of `{id, keep, score, reason, brief}` rows. Any failing batch
//! (transport, timeout, unparseable output) aborts the whole pass: [`BatchJudge::judge`]
//! returns the error and discards decisions from earlier batches, and the gate falls back to
//! delivering everything unfiltered.
//!
//! # Seams
//!
//! - [`JudgeClient`] is the transport. [`GenaiJudgeClient`] talks to a provider through
//!   `genai`; [`MockJudgeClient`] replays scripted output in tests.
//! - [`parse_decisions`] is deliberately tolerant of prose or code fences around the array,
//!   but not of anything that is not an array once unwrapped.

pub mod batch;
pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod parse;
pub mod prompt;
pub mod types;


pub use batch::{BatchJudge, batch_ranges};
pub use client::{GenaiJudgeClient, JudgeClient};
pub use error::{JudgeError, JudgeResult};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockJudgeClient;
pub use parse::{extract_json, normalize_brief, parse_decisions};
pub use prompt::{DEFAULT_BRIEF_RULES, EVALUATION_CRITERIA, system_prompt, user_prompt};
pub use types::{Decision, DecisionMap, JudgeItem, JudgeRequest};
