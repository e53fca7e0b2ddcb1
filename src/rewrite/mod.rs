//! Structure rewriting: rebuild the four collections from the kept-id set.
//!
//! The input is only borrowed; output is a fresh copy. Within every group the surviving
//! titles keep their original order, groups left empty are removed, and the redundant
//! `count` / `total_new_count` fields are recomputed from what survived.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::candidate::{Pointer, PointerMap, Section};
use crate::judge::DecisionMap;
use crate::merge::KeptIds;
use crate::report::{Collections, NewTitleSource, ReportData, StatGroup, TitleEntry};

/// Kept slot -> brief to attach (if the judge supplied a non-empty one).
type KeptSlots<'a> = HashMap<Pointer, Option<&'a str>>;

/// Returns filtered, annotated copies of `original`.
pub fn rewrite_collections(
    original: &Collections,
    kept: &KeptIds,
    pointers: &PointerMap,
    decisions: &DecisionMap,
) -> Collections {
    let slots = kept_slots(kept, pointers, decisions);

    let new_titles: Vec<NewTitleSource> = original
        .report
        .new_titles
        .iter()
        .enumerate()
        .filter_map(|(si, source)| {
            let titles = kept_titles(Section::HotNew, si, &source.titles, &slots);
            (!titles.is_empty()).then(|| NewTitleSource {
                source_id: source.source_id.clone(),
                source_name: source.source_name.clone(),
                titles,
                extra: source.extra.clone(),
            })
        })
        .collect();
    let total_new_count = new_titles.iter().map(|s| s.titles.len()).sum();

    Collections {
        report: ReportData {
            stats: rewrite_stat_groups(Section::HotStats, &original.report.stats, &slots),
            new_titles,
            total_new_count,
            extra: original.report.extra.clone(),
        },
        rss_items: original
            .rss_items
            .as_deref()
            .map(|groups| rewrite_stat_groups(Section::RssStats, groups, &slots)),
        rss_new_items: original
            .rss_new_items
            .as_deref()
            .map(|groups| rewrite_stat_groups(Section::RssNew, groups, &slots)),
    }
}

fn kept_slots<'a>(kept: &KeptIds, pointers: &PointerMap, decisions: &'a DecisionMap) -> KeptSlots<'a> {
    kept.iter()
        .filter_map(|id| {
            let pointer = *pointers.get(id)?;
            let brief = decisions
                .get(id)
                .map(|d| d.brief.as_str())
                .filter(|b| !b.is_empty());
            Some((pointer, brief))
        })
        .collect()
}

fn rewrite_stat_groups(section: Section, groups: &[StatGroup], slots: &KeptSlots<'_>) -> Vec<StatGroup> {
    groups
        .iter()
        .enumerate()
        .filter_map(|(gi, group)| {
            let titles = kept_titles(section, gi, &group.titles, slots);
            (!titles.is_empty()).then(|| StatGroup {
                word: group.word.clone(),
                count: titles.len(),
                titles,
                extra: group.extra.clone(),
            })
        })
        .collect()
}

fn kept_titles(
    section: Section,
    group_index: usize,
    titles: &[TitleEntry],
    slots: &KeptSlots<'_>,
) -> Vec<TitleEntry> {
    titles
        .iter()
        .enumerate()
        .filter_map(|(title_index, entry)| {
            let pointer = Pointer {
                section,
                group_index,
                title_index,
            };
            let brief = slots.get(&pointer)?;
            let mut entry = entry.clone();
            if let Some(brief) = brief {
                entry.brief = Some((*brief).to_string());
            }
            Some(entry)
        })
        .collect()
}
