use super::*;
use crate::candidate::{CandidateItem, Section};
use crate::judge::{Decision, DecisionMap};

fn items(n: usize) -> Vec<CandidateItem> {
    (0..n)
        .map(|i| CandidateItem {
            id: format!("rss_stats:0:{i}"),
            title: format!("t{i}"),
            source_name: String::new(),
            group: "AI".to_string(),
            section: Section::RssStats,
            url: String::new(),
        })
        .collect()
}

fn drop_all(items: &[CandidateItem]) -> DecisionMap {
    items
        .iter()
        .map(|it| (it.id.clone(), Decision::new(false, 0)))
        .collect()
}

#[test]
fn test_evaluation_window() {
    let all = items(5);
    assert_eq!(evaluation_window(&all, 0).len(), 5);
    assert_eq!(evaluation_window(&all, 3).len(), 3);
    assert_eq!(evaluation_window(&all, 10).len(), 5);
    assert_eq!(evaluation_window(&all, 3)[2].id, "rss_stats:0:2");
}

#[test]
fn test_threshold_boundary() {
    let all = items(3);
    let decisions: DecisionMap = [
        ("rss_stats:0:0".to_string(), Decision::new(true, 60)),
        ("rss_stats:0:1".to_string(), Decision::new(true, 59)),
        ("rss_stats:0:2".to_string(), Decision::new(false, 95)),
    ]
    .into_iter()
    .collect();

    let kept = compute_kept_ids(&all, &all, &decisions, 60);

    assert!(kept.contains("rss_stats:0:0"));
    assert!(!kept.contains("rss_stats:0:1"));
    assert!(!kept.contains("rss_stats:0:2"));
}

#[test]
fn test_items_beyond_cap_always_kept() {
    let all = items(6);
    let evaluated = evaluation_window(&all, 2);
    // Verdicts for items past the cap must not matter.
    let decisions = drop_all(&all);

    let kept = compute_kept_ids(&all, evaluated, &decisions, 60);

    assert!(!kept.contains("rss_stats:0:0"));
    assert!(!kept.contains("rss_stats:0:1"));
    for i in 2..6 {
        assert!(kept.contains(&format!("rss_stats:0:{i}")));
    }
}

#[test]
fn test_missing_decision_defaults_to_keep() {
    let all = items(3);
    let decisions: DecisionMap = [("rss_stats:0:1".to_string(), Decision::new(false, 10))]
        .into_iter()
        .collect();

    let kept = compute_kept_ids(&all, &all, &decisions, 60);

    assert_eq!(kept.len(), 2);
    assert!(kept.contains("rss_stats:0:0"));
    assert!(kept.contains("rss_stats:0:2"));
}

#[test]
fn test_kept_is_subset_of_candidates() {
    let all = items(4);
    let mut decisions = drop_all(&all);
    decisions.insert("hot_new:3:3".to_string(), Decision::new(true, 100));

    let kept = compute_kept_ids(&all, &all, &decisions, 0);

    assert!(kept.is_empty());
}

#[test]
fn test_no_items() {
    let kept = compute_kept_ids(&[], &[], &DecisionMap::new(), 60);
    assert!(kept.is_empty());
}
