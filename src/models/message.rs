use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Intent;

/// Inbound webchat message. Immutable once received; `metadata` is an opaque
/// bag the integration layer may attach (session ids, client hints).
#[derive(Debug, Clone, Deserialize)]
pub struct WebchatMessage {
    pub user_id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct WebchatReply {
    pub reply: String,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_contact: Option<bool>,
}

impl WebchatReply {
    pub fn new(reply: impl Into<String>, intent: Intent) -> Self {
        Self {
            reply: reply.into(),
            intent,
            job_id: None,
            needs_contact: None,
        }
    }
}
