use super::*;
use crate::candidate::collect_candidates;
use crate::judge::Decision;
use crate::report::{Collections, NewTitleSource, ReportData, StatGroup, TitleEntry};
use serde_json::json;

fn sample() -> Collections {
    let mut ai = StatGroup::new(
        "AI",
        vec![
            TitleEntry::new("A1"),
            TitleEntry::new("A2"),
            TitleEntry::new("A3"),
        ],
    );
    ai.extra.insert("percentage".to_string(), json!(42.5));

    Collections::new(ReportData {
        stats: vec![ai, StatGroup::new("XR", vec![TitleEntry::new("X1")])],
        new_titles: vec![
            NewTitleSource::new("weibo", vec![TitleEntry::new("N1"), TitleEntry::new("N2")]),
            NewTitleSource::new("zhihu", vec![TitleEntry::new("N3")]),
        ],
        total_new_count: 3,
        extra: [("mode".to_string(), json!("daily"))].into_iter().collect(),
    })
    .with_rss_items(vec![StatGroup::new("AI", vec![TitleEntry::new("R1")])])
}

fn kept(ids: &[&str]) -> KeptIds {
    ids.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_rewrite_keeps_order_and_recounts() {
    let original = sample();
    let (_, pointers) = collect_candidates(&original);
    let kept = kept(&["hot_stats:0:2", "hot_stats:0:0", "hot_new:0:1", "hot_new:1:0"]);

    let out = rewrite_collections(&original, &kept, &pointers, &DecisionMap::new());

    assert_eq!(out.report.stats.len(), 1);
    let ai = &out.report.stats[0];
    let titles: Vec<&str> = ai.titles.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["A1", "A3"]);
    assert_eq!(ai.count, 2);
    assert_eq!(ai.extra.get("percentage"), Some(&json!(42.5)));

    assert_eq!(out.report.new_titles.len(), 2);
    assert_eq!(out.report.total_new_count, 2);
    assert_eq!(out.report.extra.get("mode"), Some(&json!("daily")));
}

#[test]
fn test_rewrite_drops_empty_groups() {
    let original = sample();
    let (_, pointers) = collect_candidates(&original);
    let kept = kept(&["hot_stats:1:0"]);

    let out = rewrite_collections(&original, &kept, &pointers, &DecisionMap::new());

    assert_eq!(out.report.stats.len(), 1);
    assert_eq!(out.report.stats[0].word, "XR");
    assert!(out.report.new_titles.is_empty());
    assert_eq!(out.report.total_new_count, 0);
    assert_eq!(out.rss_items, Some(vec![]));
    assert!(out.rss_new_items.is_none());
}

#[test]
fn test_rewrite_attaches_non_empty_briefs() {
    let original = sample();
    let (_, pointers) = collect_candidates(&original);
    let kept = kept(&["hot_stats:0:0", "hot_stats:0:1", "rss_stats:0:0"]);
    let decisions: DecisionMap = [
        (
            "hot_stats:0:0".to_string(),
            Decision::new(true, 90).with_brief("glasses enter mass production"),
        ),
        ("hot_stats:0:1".to_string(), Decision::new(true, 90)),
    ]
    .into_iter()
    .collect();

    let out = rewrite_collections(&original, &kept, &pointers, &decisions);

    let ai = &out.report.stats[0];
    assert_eq!(
        ai.titles[0].brief.as_deref(),
        Some("glasses enter mass production")
    );
    assert!(ai.titles[1].brief.is_none());
    assert!(out.rss_items.as_ref().unwrap()[0].titles[0].brief.is_none());
}

#[test]
fn test_rewrite_never_mutates_input() {
    let original = sample();
    let snapshot = original.clone();
    let (_, pointers) = collect_candidates(&original);
    let decisions: DecisionMap = [(
        "hot_stats:0:0".to_string(),
        Decision::new(true, 90).with_brief("note"),
    )]
    .into_iter()
    .collect();

    let _ = rewrite_collections(&original, &kept(&["hot_stats:0:0"]), &pointers, &decisions);

    assert_eq!(original, snapshot);
}

#[test]
fn test_rewrite_is_idempotent() {
    let original = sample();
    let (items, pointers) = collect_candidates(&original);
    let kept: KeptIds = items
        .iter()
        .step_by(2)
        .map(|it| it.id.clone())
        .collect();
    let decisions: DecisionMap = items
        .iter()
        .map(|it| {
            (
                it.id.clone(),
                Decision::new(true, 80).with_brief(format!("b-{}", it.id)),
            )
        })
        .collect();

    let first = rewrite_collections(&original, &kept, &pointers, &decisions);
    let second = rewrite_collections(&original, &kept, &pointers, &decisions);

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_rewrite_count_consistency() {
    let original = sample()
        .with_rss_new_items(vec![StatGroup::new(
            "XR",
            vec![TitleEntry::new("RN1"), TitleEntry::new("RN2")],
        )]);
    let (items, pointers) = collect_candidates(&original);
    let kept: KeptIds = items
        .iter()
        .filter(|it| !it.id.ends_with(":1"))
        .map(|it| it.id.clone())
        .collect();

    let out = rewrite_collections(&original, &kept, &pointers, &DecisionMap::new());

    let all_groups = out
        .report
        .stats
        .iter()
        .chain(out.rss_items.iter().flatten())
        .chain(out.rss_new_items.iter().flatten());
    for group in all_groups {
        assert_eq!(group.count, group.titles.len());
    }
    let total: usize = out.report.new_titles.iter().map(|s| s.titles.len()).sum();
    assert_eq!(out.report.total_new_count, total);
}
