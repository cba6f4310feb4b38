use chrono::NaiveDateTime;

use crate::models::schedule::DEFAULT_CHANNEL;
use crate::models::Intent;
use crate::utils::timeparse::parse_when;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Metrics,
    SchedulePost,
    ListQueue,
    HandoffRequest,
}

/// Ordered rule table. Keyword sets overlap ("queue this" vs "queue",
/// "tonight" appears in both scheduling phrases and queue questions), so
/// evaluation order is the entire disambiguation policy: the first rule with
/// any substring hit wins and later rules are never consulted.
const RULES: &[(Tag, &[&str])] = &[
    (Tag::Metrics, &["metrics", "stats", "ctr", "views"]),
    (
        Tag::SchedulePost,
        &["schedule", "post", "line up", "queue this", "publish"],
    ),
    (
        Tag::ListQueue,
        &["queue", "what's lined up", "whats lined up", "tonight"],
    ),
    (
        Tag::HandoffRequest,
        &["refund", "defective", "broken", "angry"],
    ),
];

/// Map free text to exactly one intent. Total: anything unmatched is
/// `Unknown`, never an error. The reference instant feeds time resolution
/// for scheduling requests.
pub fn classify(text: &str, now: NaiveDateTime) -> Intent {
    let low = text.to_lowercase();
    for (tag, keywords) in RULES {
        if keywords.iter().any(|k| low.contains(k)) {
            return build(*tag, &low, now);
        }
    }
    Intent::Unknown
}

fn build(tag: Tag, low: &str, now: NaiveDateTime) -> Intent {
    match tag {
        Tag::Metrics => Intent::Metrics {
            range: "24h".to_string(),
        },
        Tag::SchedulePost => Intent::SchedulePost {
            when: parse_when(low, now),
            channel: DEFAULT_CHANNEL.to_string(),
        },
        Tag::ListQueue => Intent::ListQueue {
            window: "tonight".to_string(),
        },
        Tag::HandoffRequest => Intent::HandoffRequest {
            reason: "support_issue".to_string(),
        },
    }
}
