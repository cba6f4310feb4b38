use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Platform a scheduled post lands on when the message does not say otherwise.
pub const DEFAULT_CHANNEL: &str = "tiktok";

/// Mid-range priority on Silhouette's 1-10 scale.
pub const DEFAULT_PRIORITY: u8 = 5;

/// ISO-8601 rendering shared by the wire `when` field and idempotency keys.
pub fn format_when(when: &NaiveDateTime) -> String {
    when.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Deterministic dedup key: identical (caller, resolved time) pairs must
/// always produce byte-identical keys so Silhouette can drop retried submits.
pub fn idempotency_key(user_id: &str, when: &NaiveDateTime) -> String {
    format!("{user_id}|{}", format_when(when))
}

/// Payload for Silhouette's enqueue endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub channel: String,
    pub when: String,
    pub body: PostBody,
    pub options: ScheduleOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostBody {
    pub text: String,
    pub media_ids: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOptions {
    pub dry_run: bool,
    pub priority: u8,
    pub idempotency_key: String,
}

impl ScheduleRequest {
    /// Build a dry-run submission for a webchat-originated post.
    pub fn dry_run(user_id: &str, text: &str, channel: &str, when: &NaiveDateTime) -> Self {
        Self {
            channel: channel.to_string(),
            when: format_when(when),
            body: PostBody {
                text: text.to_string(),
                media_ids: Vec::new(),
                tags: vec!["webchat".to_string()],
            },
            options: ScheduleOptions {
                dry_run: true,
                priority: DEFAULT_PRIORITY,
                idempotency_key: idempotency_key(user_id, when),
            },
        }
    }
}
