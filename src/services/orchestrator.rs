use chrono::Utc;

use crate::errors::AppError;
use crate::models::{Intent, ScheduleRequest, WebchatMessage, WebchatReply};
use crate::services::classifier;
use crate::services::silhouette::{EVENT_WINDOW, PUBLISHED_EVENT};
use crate::state::AppState;

/// Classify an incoming message against the current wall clock and dispatch.
pub async fn handle_message(
    state: &AppState,
    msg: &WebchatMessage,
) -> Result<WebchatReply, AppError> {
    let now = Utc::now().naive_utc();
    let intent = classifier::classify(&msg.text, now);
    tracing::info!(user = %msg.user_id, intent = intent.tag(), "classified message");
    dispatch(state, msg, intent).await
}

/// Per-intent dispatch. At most one outbound Silhouette call per invocation;
/// remote failures bubble up to the HTTP layer, while locally answerable
/// intents (missing time, handoff, unknown) never touch the network.
pub async fn dispatch(
    state: &AppState,
    msg: &WebchatMessage,
    intent: Intent,
) -> Result<WebchatReply, AppError> {
    let (reply, job_id, needs_contact) = match &intent {
        Intent::Metrics { range } => {
            let data = state
                .silhouette
                .metrics(range)
                .await
                .map_err(AppError::silhouette)?;
            let reply = format!(
                "{} — {} published, {} failed in the last {range}",
                state.persona.say("metrics", "Metrics"),
                data.total.published,
                data.total.failed,
            );
            (reply, None, None)
        }
        Intent::SchedulePost { when: None, .. } => (
            "Give me a time (e.g. 7:15pm) and I'll line it up.".to_string(),
            None,
            None,
        ),
        Intent::SchedulePost {
            when: Some(when),
            channel,
        } => {
            let request = ScheduleRequest::dry_run(&msg.user_id, &msg.text, channel, when);
            let res = state
                .silhouette
                .enqueue(&request)
                .await
                .map_err(AppError::silhouette)?;
            let job_short: String = res.job_id.chars().take(4).collect::<String>().to_uppercase();
            let reply = format!(
                "{} — {} on {}. Job #{job_short}.",
                state.persona.say("queued", "Queued"),
                request.when,
                request.channel,
            );
            (reply, Some(res.job_id), None)
        }
        Intent::ListQueue { .. } => {
            // Published count over a recent window, not true pending depth.
            // Stands in until Silhouette exposes a queue endpoint.
            let stream = state
                .silhouette
                .events(0, EVENT_WINDOW)
                .await
                .map_err(AppError::silhouette)?;
            let count = stream
                .events
                .iter()
                .filter(|e| e.kind == PUBLISHED_EVENT)
                .count();
            (
                format!("{count} posts published in the recent stream. (Detailed queue endpoint TBD.)"),
                None,
                None,
            )
        }
        Intent::HandoffRequest { .. } => (
            "Sorry you're dealing with that. Leave a contact number and a human will follow up shortly."
                .to_string(),
            None,
            Some(true),
        ),
        Intent::Unknown => (
            "Do you want metrics, schedule a post, or check the queue?".to_string(),
            None,
            None,
        ),
    };

    Ok(WebchatReply {
        reply,
        intent,
        job_id,
        needs_contact,
    })
}
