//! Typed shapes of the collections handed to the gate.
//!
//! Four collections arrive per delivery cycle: hot-list keyword groups (`stats`), hot-list
//! new arrivals (`new_titles`), RSS keyword groups and RSS new arrivals. Fields the gate does
//! not inspect are carried through untouched in each type's `extra` map.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::{Collections, NewTitleSource, ReportData, StatGroup, TitleEntry};
