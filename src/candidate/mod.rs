//! Candidate collection: flatten the four collections into one evaluation list.
//!
//! Each surviving entry gets a [`CandidateId`] derived from its section and position, and a
//! [`Pointer`] recording where it lives. The rewriter walks the original collections with the
//! same scheme, so ids never need a back-reference to the entry itself.

pub mod collector;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use collector::collect_candidates;
pub use error::CandidateIdError;
pub use types::{CandidateId, CandidateItem, Pointer, PointerMap, Section};
