use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CandidateIdError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Source collection a candidate was drawn from.
pub enum Section {
    /// Hot-list keyword groups (`report.stats`).
    HotStats,
    /// Hot-list new arrivals (`report.new_titles`).
    HotNew,
    /// RSS keyword groups.
    RssStats,
    /// RSS new arrivals.
    RssNew,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::HotStats,
        Section::HotNew,
        Section::RssStats,
        Section::RssNew,
    ];

    /// Namespace prefix used in candidate ids.
    pub fn prefix(self) -> &'static str {
        match self {
            Section::HotStats => "hot_stats",
            Section::HotNew => "hot_new",
            Section::RssStats => "rss_stats",
            Section::RssNew => "rss_new",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Section {
    type Err = CandidateIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.prefix() == s)
            .ok_or_else(|| CandidateIdError::UnknownSection {
                section: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Positional key of a candidate: `"{section}:{group_index}:{title_index}"`.
pub struct CandidateId {
    pub section: Section,
    pub group_index: usize,
    pub title_index: usize,
}

impl CandidateId {
    pub fn new(section: Section, group_index: usize, title_index: usize) -> Self {
        Self {
            section,
            group_index,
            title_index,
        }
    }

    pub fn pointer(&self) -> Pointer {
        Pointer {
            section: self.section,
            group_index: self.group_index,
            title_index: self.title_index,
        }
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.section, self.group_index, self.title_index)
    }
}

impl FromStr for CandidateId {
    type Err = CandidateIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let (Some(section), Some(group), Some(title), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CandidateIdError::Malformed { id: s.to_string() });
        };

        let index = |value: &str| {
            value
                .parse::<usize>()
                .map_err(|_| CandidateIdError::InvalidIndex {
                    id: s.to_string(),
                    value: value.to_string(),
                })
        };

        Ok(Self {
            section: section.parse()?,
            group_index: index(group)?,
            title_index: index(title)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A flattened entry eligible for judgment.
pub struct CandidateItem {
    pub id: String,
    pub title: String,
    pub source_name: String,
    /// Keyword group; empty for hot-list new arrivals.
    pub group: String,
    pub section: Section,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Location of a candidate inside its original collection.
pub struct Pointer {
    pub section: Section,
    pub group_index: usize,
    pub title_index: usize,
}

/// Candidate id -> original slot.
pub type PointerMap = HashMap<String, Pointer>;
