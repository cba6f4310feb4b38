pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::ScheduleRequest;

/// Event type Silhouette emits once a post has gone out.
pub const PUBLISHED_EVENT: &str = "post.published";

/// How far back the recent-events window reaches.
pub const EVENT_WINDOW: u32 = 50;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnqueueResponse {
    pub job_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub total: MetricsTotals,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MetricsTotals {
    #[serde(default)]
    pub published: u64,
    #[serde(default)]
    pub failed: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
}

/// Silhouette scheduling/metrics service. Behind a trait so handlers and the
/// scheduler can run against a mock in tests.
#[async_trait]
pub trait SilhouetteApi: Send + Sync {
    async fn enqueue(&self, request: &ScheduleRequest) -> anyhow::Result<EnqueueResponse>;

    async fn metrics(&self, range: &str) -> anyhow::Result<MetricsResponse>;

    async fn events(&self, since: u32, limit: u32) -> anyhow::Result<EventsResponse>;
}
