use super::*;
use serde_json::json;

#[test]
fn test_title_entry_link_prefers_mobile_url() {
    let entry = TitleEntry::new("t")
        .with_url("https://example.com/a")
        .with_mobile_url("https://m.example.com/a");
    assert_eq!(entry.link(), "https://m.example.com/a");

    let entry = TitleEntry::new("t")
        .with_url("  https://example.com/a ")
        .with_mobile_url("   ");
    assert_eq!(entry.link(), "https://example.com/a");

    assert_eq!(TitleEntry::new("t").link(), "");
}

#[test]
fn test_title_entry_accepts_both_mobile_url_spellings() {
    let camel: TitleEntry =
        serde_json::from_value(json!({"title": "a", "mobileUrl": "https://m/1"})).unwrap();
    let snake: TitleEntry =
        serde_json::from_value(json!({"title": "a", "mobile_url": "https://m/1"})).unwrap();

    assert_eq!(camel.mobile_url.as_deref(), Some("https://m/1"));
    assert_eq!(snake.mobile_url.as_deref(), Some("https://m/1"));
}

#[test]
fn test_unknown_fields_survive_round_trip() {
    let raw = json!({
        "title": "GPU shipments",
        "source_name": "wallstreetcn",
        "ranks": [1, 3],
        "time_display": "08:00",
        "is_new": true
    });

    let entry: TitleEntry = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(entry.extra.get("ranks"), Some(&json!([1, 3])));
    assert!(entry.brief.is_none());

    let back = serde_json::to_value(&entry).unwrap();
    assert_eq!(back, raw);
}

#[test]
fn test_report_defaults_for_missing_sections() {
    let report: ReportData = serde_json::from_value(json!({})).unwrap();
    assert!(report.stats.is_empty());
    assert!(report.new_titles.is_empty());
    assert_eq!(report.total_new_count, 0);
}

#[test]
fn test_collections_absent_rss_stays_absent() {
    let collections: Collections =
        serde_json::from_value(json!({"report": {"stats": []}})).unwrap();
    assert!(collections.rss_items.is_none());
    assert!(collections.rss_new_items.is_none());

    let out = serde_json::to_value(&collections).unwrap();
    assert!(out.get("rss_items").is_none());
}

#[test]
fn test_title_count_spans_all_sections() {
    let collections = Collections::new(ReportData {
        stats: vec![StatGroup::new(
            "AI",
            vec![TitleEntry::new("a"), TitleEntry::new("b")],
        )],
        new_titles: vec![NewTitleSource::new("weibo", vec![TitleEntry::new("c")])],
        total_new_count: 1,
        ..Default::default()
    })
    .with_rss_items(vec![StatGroup::new("XR", vec![TitleEntry::new("d")])])
    .with_rss_new_items(vec![StatGroup::new("XR", vec![TitleEntry::new("")])]);

    assert_eq!(collections.title_count(), 5);
}

#[test]
fn test_null_fields_read_as_defaults() {
    let collections: Collections = serde_json::from_value(json!({
        "report": {
            "stats": [
                {"word": null, "count": null, "titles": null},
                {"word": "AI", "titles": [{"title": null}, {"title": "A", "url": null}]}
            ],
            "new_titles": null,
            "total_new_count": null
        },
        "rss_items": null,
        "rss_new_items": [{"word": "XR", "titles": [{"title": "B", "source_name": null}]}]
    }))
    .unwrap();

    let stats = &collections.report.stats;
    assert_eq!(stats[0].word, "");
    assert_eq!(stats[0].count, 0);
    assert!(stats[0].titles.is_empty());
    assert_eq!(stats[1].titles[0].title, "");
    assert_eq!(stats[1].titles[1].title, "A");
    assert!(stats[1].titles[1].url.is_none());
    assert!(collections.report.new_titles.is_empty());
    assert_eq!(collections.report.total_new_count, 0);
    assert!(collections.rss_items.is_none());
    assert_eq!(collections.rss_new_items.as_ref().map(Vec::len), Some(1));
    assert_eq!(collections.title_count(), 3);

    let report: Collections = serde_json::from_value(json!({"report": null})).unwrap();
    assert_eq!(report, Collections::default());
}
