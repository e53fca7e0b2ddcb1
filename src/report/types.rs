use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Reads an explicit JSON `null` as the field's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// One title inside a group.
pub struct TitleEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(
        default,
        rename = "mobileUrl",
        alias = "mobile_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub mobile_url: Option<String>,

    /// Judge-supplied annotation, set only on surviving entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brief: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TitleEntry {
    /// Creates an entry with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_mobile_url(mut self, mobile_url: impl Into<String>) -> Self {
        self.mobile_url = Some(mobile_url.into());
        self
    }

    /// Link used for judging and enrichment: mobile URL first, then the desktop URL.
    pub fn link(&self) -> &str {
        [self.mobile_url.as_deref(), self.url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|u| !u.is_empty())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Keyword group (hot `stats`, `rss_items`, `rss_new_items`).
pub struct StatGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,

    /// Redundant with `titles.len()`; kept consistent after filtering.
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: usize,

    #[serde(default, deserialize_with = "null_as_default")]
    pub titles: Vec<TitleEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatGroup {
    pub fn new(word: impl Into<String>, titles: Vec<TitleEntry>) -> Self {
        Self {
            word: word.into(),
            count: titles.len(),
            titles,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Per-platform block of newly seen hot-list titles.
pub struct NewTitleSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub titles: Vec<TitleEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewTitleSource {
    pub fn new(source_name: impl Into<String>, titles: Vec<TitleEntry>) -> Self {
        Self {
            source_id: None,
            source_name: Some(source_name.into()),
            titles,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Hot-list report: keyword groups plus new arrivals.
pub struct ReportData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Vec<StatGroup>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub new_titles: Vec<NewTitleSource>,

    /// Running total of titles across `new_titles`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_new_count: usize,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Everything one gate invocation filters.
///
/// `None` RSS collections mean "not part of this delivery" and stay `None` after filtering.
pub struct Collections {
    #[serde(default, deserialize_with = "null_as_default")]
    pub report: ReportData,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rss_items: Option<Vec<StatGroup>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rss_new_items: Option<Vec<StatGroup>>,
}

impl Collections {
    pub fn new(report: ReportData) -> Self {
        Self {
            report,
            rss_items: None,
            rss_new_items: None,
        }
    }

    pub fn with_rss_items(mut self, groups: Vec<StatGroup>) -> Self {
        self.rss_items = Some(groups);
        self
    }

    pub fn with_rss_new_items(mut self, groups: Vec<StatGroup>) -> Self {
        self.rss_new_items = Some(groups);
        self
    }

    /// Total number of title entries across all four collections (blank titles included).
    pub fn title_count(&self) -> usize {
        let groups = |gs: &[StatGroup]| gs.iter().map(|g| g.titles.len()).sum::<usize>();
        groups(&self.report.stats)
            + self
                .report
                .new_titles
                .iter()
                .map(|s| s.titles.len())
                .sum::<usize>()
            + self.rss_items.as_deref().map_or(0, groups)
            + self.rss_new_items.as_deref().map_or(0, groups)
    }
}
