use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Read-only run summary for logs. Nothing downstream branches on it.
pub struct EvaluationStats {
    /// Candidates collected (non-blank titles).
    pub total_items: usize,
    /// Candidates sent for judgment (after the cap).
    pub evaluated_items: usize,
    pub kept_items: usize,
    pub dropped_items: usize,
    /// Set when the run fell back to passing input through unfiltered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvaluationStats {
    /// Records the kept count and derives the dropped count from it.
    pub fn record_kept(&mut self, kept: usize) {
        self.kept_items = kept;
        self.dropped_items = self.total_items.saturating_sub(kept);
    }

    pub fn is_healthy(&self) -> bool {
        self.error.is_none()
    }
}
