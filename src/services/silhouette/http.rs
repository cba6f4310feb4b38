use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;

use super::{EnqueueResponse, EventsResponse, MetricsResponse, SilhouetteApi};
use crate::models::ScheduleRequest;

/// Per-call timeout; a slow Silhouette fails the call rather than hanging
/// the handler. No automatic retry at this layer.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// reqwest-backed client. One instance per process: the inner client pools
/// connections, so concurrent handlers reuse sockets instead of redialing.
pub struct HttpSilhouette {
    base: String,
    client: reqwest::Client,
}

impl HttpSilhouette {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build Silhouette HTTP client")?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl SilhouetteApi for HttpSilhouette {
    async fn enqueue(&self, request: &ScheduleRequest) -> anyhow::Result<EnqueueResponse> {
        let url = format!("{}/v1/silhouette/enqueue", self.base);
        let resp = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .context("failed to reach Silhouette enqueue")?
            .error_for_status()
            .context("Silhouette enqueue returned error")?;
        resp.json()
            .await
            .context("failed to parse Silhouette enqueue response")
    }

    async fn metrics(&self, range: &str) -> anyhow::Result<MetricsResponse> {
        let url = format!("{}/v1/silhouette/metrics", self.base);
        let resp = self
            .client
            .get(&url)
            .query(&[("range", range)])
            .send()
            .await
            .context("failed to reach Silhouette metrics")?
            .error_for_status()
            .context("Silhouette metrics returned error")?;
        resp.json()
            .await
            .context("failed to parse Silhouette metrics response")
    }

    async fn events(&self, since: u32, limit: u32) -> anyhow::Result<EventsResponse> {
        let url = format!("{}/v1/silhouette/events/stream", self.base);
        let resp = self
            .client
            .get(&url)
            .query(&[("since", since), ("limit", limit)])
            .send()
            .await
            .context("failed to reach Silhouette events")?
            .error_for_status()
            .context("Silhouette events returned error")?;
        resp.json()
            .await
            .context("failed to parse Silhouette events response")
    }
}
