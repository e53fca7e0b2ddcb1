use crate::report::{Collections, StatGroup, TitleEntry};

use super::types::{CandidateId, CandidateItem, PointerMap, Section};

/// Flattens every non-blank title across the four collections, in section order
/// (`hot_stats`, `hot_new`, `rss_stats`, `rss_new`) and then positional order.
pub fn collect_candidates(collections: &Collections) -> (Vec<CandidateItem>, PointerMap) {
    let mut collector = Collector::default();

    for (gi, group) in collections.report.stats.iter().enumerate() {
        collector.push_group(Section::HotStats, gi, group.word.trim(), "", &group.titles);
    }

    for (si, source) in collections.report.new_titles.iter().enumerate() {
        let platform = source.source_name.as_deref().unwrap_or("").trim();
        collector.push_group(Section::HotNew, si, "", platform, &source.titles);
    }

    collector.push_stat_groups(Section::RssStats, collections.rss_items.as_deref());
    collector.push_stat_groups(Section::RssNew, collections.rss_new_items.as_deref());

    (collector.items, collector.pointers)
}

#[derive(Default)]
struct Collector {
    items: Vec<CandidateItem>,
    pointers: PointerMap,
}

impl Collector {
    fn push_stat_groups(&mut self, section: Section, groups: Option<&[StatGroup]>) {
        for (gi, group) in groups.unwrap_or_default().iter().enumerate() {
            self.push_group(section, gi, group.word.trim(), "", &group.titles);
        }
    }

    /// `fallback_source` names entries that carry no `source_name` of their own.
    fn push_group(
        &mut self,
        section: Section,
        gi: usize,
        group: &str,
        fallback_source: &str,
        titles: &[TitleEntry],
    ) {
        for (ti, entry) in titles.iter().enumerate() {
            let title = entry.title.trim();
            if title.is_empty() {
                continue;
            }

            let id = CandidateId::new(section, gi, ti);
            let key = id.to_string();

            self.items.push(CandidateItem {
                id: key.clone(),
                title: title.to_string(),
                source_name: entry
                    .source_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .unwrap_or(fallback_source)
                    .to_string(),
                group: group.to_string(),
                section,
                url: entry.link().to_string(),
            });
            self.pointers.insert(key, id.pointer());
        }
    }
}
