//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use trendgate::{Collections, GateConfig};

/// Gate config with a credential and no evaluation cap.
pub fn enabled_config() -> GateConfig {
    GateConfig {
        enabled: true,
        api_key: Some("integration-key".to_string()),
        max_items: 0,
        ..Default::default()
    }
}

/// A delivery document shaped like the upstream report payload, including fields the gate
/// does not interpret.
pub fn digest_document() -> Value {
    json!({
        "report": {
            "stats": [
                {
                    "word": "AI",
                    "count": 3,
                    "percentage": 42.5,
                    "titles": [
                        {"title": "Open model tops benchmark", "source_name": "Zhihu",
                         "url": "https://example.com/a", "mobileUrl": "https://m.example.com/a",
                         "ranks": [1, 2], "is_new": true},
                        {"title": "Celebrity gossip roundup", "source_name": "Weibo",
                         "url": "https://example.com/b"},
                        {"title": "", "source_name": "Weibo"}
                    ]
                },
                {
                    "word": "Chips",
                    "count": 1,
                    "titles": [
                        {"title": "Fab delays announced", "source_name": "Toutiao"}
                    ]
                }
            ],
            "new_titles": [
                {
                    "source_id": "weibo",
                    "source_name": "Weibo",
                    "titles": [
                        {"title": "Phone launch teaser"},
                        {"title": "Lottery winner interview"}
                    ]
                }
            ],
            "total_new_count": 2,
            "failed_ids": ["douyin"]
        },
        "rss_items": [
            {
                "word": "XR",
                "count": 1,
                "titles": [{"title": "Headset SDK ships", "url": "https://feed.example.com/x"}]
            }
        ],
        "rss_new_items": []
    })
}

pub fn digest() -> Collections {
    serde_json::from_value(digest_document()).expect("fixture should deserialize")
}

/// Judge verdicts for [`digest`]: keeps the tech items, drops the rest.
pub fn tech_verdicts() -> String {
    json!([
        {"id": "hot_stats:0:0", "keep": true, "score": 91, "reason": "model release",
         "brief": "New open model leads\nthe leaderboard"},
        {"id": "hot_stats:0:1", "keep": false, "score": 5, "reason": "gossip"},
        {"id": "hot_stats:1:0", "keep": "yes", "score": "72", "brief": "Fab schedule slips"},
        {"id": "hot_new:0:0", "keep": true, "score": 64},
        {"id": "hot_new:0:1", "keep": false, "score": 2},
        {"id": "rss_stats:0:0", "keep": true, "score": 59, "brief": "Too low to keep"}
    ])
    .to_string()
}
