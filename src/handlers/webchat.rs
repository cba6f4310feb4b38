use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{WebchatMessage, WebchatReply};
use crate::services::orchestrator;
use crate::state::AppState;

/// Webchat ingress: one message in, one reply out. Remote-service failures
/// surface as 502 so the integration layer can show a generic error.
pub async fn webchat(
    State(state): State<Arc<AppState>>,
    Json(msg): Json<WebchatMessage>,
) -> Result<Json<WebchatReply>, AppError> {
    tracing::info!(user = %msg.user_id, text = %msg.text, "incoming webchat message");
    let reply = orchestrator::handle_message(&state, &msg).await?;
    Ok(Json(reply))
}
