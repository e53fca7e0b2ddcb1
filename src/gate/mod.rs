//! The quality gate pipeline.
//!
//! `collect -> (enrich) -> judge -> merge -> rewrite`, run once per delivery cycle.
//!
//! # Fail-open
//!
//! [`QualityGate::filter_before_send`] never returns an error. When the gate is disabled,
//! has no credential, or any judge batch fails, the caller gets an exact copy of its input
//! and the reason in [`EvaluationStats::error`]. There is no partial filtering.

pub mod error;
pub mod pipeline;
pub mod stats;


pub use error::GateError;
pub use pipeline::{GateOutcome, QualityGate};
pub use stats::EvaluationStats;
