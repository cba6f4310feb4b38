use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Classified purpose of an incoming message, one variant per intent tag.
///
/// Slots are carried on the variant itself so a classification can never mix
/// a tag with another tag's parameters. `when` is optional only on
/// `SchedulePost`: an unresolvable time expression is a normal outcome there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "intent", content = "slots", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    Metrics {
        range: String,
    },
    SchedulePost {
        when: Option<NaiveDateTime>,
        channel: String,
    },
    ListQueue {
        window: String,
    },
    HandoffRequest {
        reason: String,
    },
    Unknown,
}

impl Intent {
    pub fn tag(&self) -> &'static str {
        match self {
            Intent::Metrics { .. } => "METRICS",
            Intent::SchedulePost { .. } => "SCHEDULE_POST",
            Intent::ListQueue { .. } => "LIST_QUEUE",
            Intent::HandoffRequest { .. } => "HANDOFF_REQUEST",
            Intent::Unknown => "UNKNOWN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_with_slots() {
        let intent = Intent::Metrics {
            range: "24h".to_string(),
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["intent"], "METRICS");
        assert_eq!(json["slots"]["range"], "24h");
    }

    #[test]
    fn test_serialize_unknown_has_no_slots() {
        let json = serde_json::to_value(&Intent::Unknown).unwrap();
        assert_eq!(json["intent"], "UNKNOWN");
        assert!(json.get("slots").is_none());
    }
}
