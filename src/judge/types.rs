use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Judge verdict for one evaluated candidate.
pub struct Decision {
    pub keep: bool,
    /// Relevance on a 0-100 scale.
    pub score: u8,
    pub reason: String,
    /// Normalized annotation (single line, at most 80 characters). May be empty.
    pub brief: String,
}

impl Decision {
    pub fn new(keep: bool, score: u8) -> Self {
        Self {
            keep,
            score,
            ..Default::default()
        }
    }

    pub fn with_brief(mut self, brief: impl Into<String>) -> Self {
        self.brief = brief.into();
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Keep-policy for an evaluated candidate.
    pub fn passes(&self, min_score: u8) -> bool {
        self.keep && self.score >= min_score
    }
}

/// Candidate id -> decision, only for ids the judge actually returned.
pub type DecisionMap = HashMap<String, Decision>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// One candidate as the judge sees it.
pub struct JudgeItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub group: String,
    pub url: String,
    /// Fetched page snippet; empty when enrichment is off or found nothing.
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Payload of one judgment call.
pub struct JudgeRequest {
    /// Fixed keep/drop rules and scoring rubric.
    pub criteria: String,
    /// Style rules for the `brief` annotation.
    pub brief_rules: String,
    /// Delivery mode (`daily`, `current`, `incremental`, ...).
    pub mode: String,
    pub items: Vec<JudgeItem>,
}

impl JudgeRequest {
    pub fn item_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.id.as_str())
    }
}
