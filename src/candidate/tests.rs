use super::*;
use crate::report::{Collections, NewTitleSource, ReportData, StatGroup, TitleEntry};
use std::collections::HashSet;

fn sample_collections() -> Collections {
    Collections::new(ReportData {
        stats: vec![
            StatGroup::new(
                " AI ",
                vec![
                    TitleEntry::new("Model release")
                        .with_source("36kr")
                        .with_url("https://36kr.com/p/1")
                        .with_mobile_url("https://m.36kr.com/p/1"),
                    TitleEntry::new("   "),
                    TitleEntry::new("Agent toolchain").with_url("https://example.com/agent"),
                ],
            ),
            StatGroup::new("XR", vec![TitleEntry::new("Headset supply chain")]),
        ],
        new_titles: vec![NewTitleSource::new(
            "weibo",
            vec![TitleEntry::new("Celebrity news").with_source("weibo")],
        )],
        total_new_count: 1,
        ..Default::default()
    })
    .with_rss_items(vec![StatGroup::new("AI", vec![TitleEntry::new("RSS item")])])
    .with_rss_new_items(vec![StatGroup::new(
        "AI",
        vec![TitleEntry::new(""), TitleEntry::new("RSS new")],
    )])
}

#[test]
fn test_section_prefixes() {
    assert_eq!(Section::HotStats.prefix(), "hot_stats");
    assert_eq!(Section::HotNew.prefix(), "hot_new");
    assert_eq!(Section::RssStats.prefix(), "rss_stats");
    assert_eq!(Section::RssNew.prefix(), "rss_new");
}

#[test]
fn test_candidate_id_display_and_parse() {
    let id = CandidateId::new(Section::HotStats, 2, 5);
    assert_eq!(id.to_string(), "hot_stats:2:5");
    assert_eq!("hot_stats:2:5".parse::<CandidateId>(), Ok(id));
    assert_eq!(
        "rss_new:0:11".parse::<CandidateId>(),
        Ok(CandidateId::new(Section::RssNew, 0, 11))
    );
}

#[test]
fn test_candidate_id_parse_errors() {
    assert!(matches!(
        "hot_stats:1".parse::<CandidateId>(),
        Err(CandidateIdError::Malformed { .. })
    ));
    assert!(matches!(
        "hot_stats:1:2:3".parse::<CandidateId>(),
        Err(CandidateIdError::Malformed { .. })
    ));
    assert!(matches!(
        "cold_stats:1:2".parse::<CandidateId>(),
        Err(CandidateIdError::UnknownSection { .. })
    ));
    assert!(matches!(
        "hot_new:a:2".parse::<CandidateId>(),
        Err(CandidateIdError::InvalidIndex { .. })
    ));
}

#[test]
fn test_collect_skips_blank_titles() {
    let (items, pointers) = collect_candidates(&sample_collections());

    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "hot_stats:0:0",
            "hot_stats:0:2",
            "hot_stats:1:0",
            "hot_new:0:0",
            "rss_stats:0:0",
            "rss_new:0:1",
        ]
    );
    assert_eq!(pointers.len(), items.len());
    assert!(!pointers.contains_key("hot_stats:0:1"));
    assert!(!pointers.contains_key("rss_new:0:0"));
}

#[test]
fn test_collect_fills_item_fields() {
    let (items, _) = collect_candidates(&sample_collections());

    let first = &items[0];
    assert_eq!(first.title, "Model release");
    assert_eq!(first.source_name, "36kr");
    assert_eq!(first.group, "AI");
    assert_eq!(first.section, Section::HotStats);
    assert_eq!(first.url, "https://m.36kr.com/p/1");

    let hot_new = items.iter().find(|i| i.section == Section::HotNew).unwrap();
    assert_eq!(hot_new.group, "");
    assert_eq!(hot_new.source_name, "weibo");
    assert_eq!(hot_new.url, "");
}

#[test]
fn test_collect_ids_unique_across_sections() {
    let (items, pointers) = collect_candidates(&sample_collections());
    let unique: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(unique.len(), items.len());

    for item in &items {
        let pointer = pointers[&item.id];
        let parsed: CandidateId = item.id.parse().unwrap();
        assert_eq!(parsed.pointer(), pointer);
        assert_eq!(pointer.section, item.section);
    }
}

#[test]
fn test_collect_empty_input() {
    let (items, pointers) = collect_candidates(&Collections::default());
    assert!(items.is_empty());
    assert!(pointers.is_empty());
}

#[test]
fn test_hot_new_source_falls_back_to_platform() {
    let collections = Collections::new(ReportData {
        new_titles: vec![NewTitleSource::new(
            " Weibo ",
            vec![
                TitleEntry::new("Phone launch teaser"),
                TitleEntry::new("Reposted").with_source("Zhihu"),
                TitleEntry::new("Blank source").with_source("  "),
            ],
        )],
        total_new_count: 3,
        ..Default::default()
    })
    .with_rss_items(vec![StatGroup::new("AI", vec![TitleEntry::new("No source")])]);

    let (items, _) = collect_candidates(&collections);
    let sources: Vec<&str> = items.iter().map(|i| i.source_name.as_str()).collect();
    assert_eq!(sources, vec!["Weibo", "Zhihu", "Weibo", ""]);
}
