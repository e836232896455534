use crate::bot::handlers::webapp::{report_failure, run_request};
use crate::error::BotError;
use crate::AppState;
use anora_shared::webapp::{InlineRequest, InlineResponse, SubscriptionStatus};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use teloxide::types::ChatId;
use tracing::{info, warn};

/// `POST /webapp/inline`: same actions as `web_app_data`, for apps opened from
/// an inline button. Replies go to the user's private chat. The body is
/// decoded here so malformed payloads get the same answer as over `sendData`.
pub async fn inline_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<InlineResponse>) {
    let req: InlineRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            let err = BotError::from(e);
            match sender_hint(&body) {
                Some(user_id) => report_failure(&state, ChatId(user_id), &err).await,
                None => warn!("Inline request rejected: {}", err),
            }
            return rejected(&err);
        }
    };
    info!("Inline web app request {}: {:?}", req.query_id, req.data);

    let Some(user_id) = req.data.user_id else {
        let err = BotError::MissingField("user_id");
        warn!("Inline request {} rejected: {}", req.query_id, err);
        return rejected(&err);
    };

    let chat_id = ChatId(user_id);
    match run_request(&state, chat_id, user_id, req.data).await {
        Ok(()) => (StatusCode::OK, Json(InlineResponse::ok())),
        Err(e) => {
            report_failure(&state, chat_id, &e).await;
            rejected(&e)
        }
    }
}

fn rejected(err: &BotError) -> (StatusCode, Json<InlineResponse>) {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, Json(InlineResponse::error(err.to_string())))
}

/// `data.user_id` out of a body that failed to decode as a whole.
fn sender_hint(body: &[u8]) -> Option<i64> {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()?
        .get("data")?
        .get("user_id")?
        .as_i64()
}

/// `GET /webapp/status/{user_id}`
pub async fn status_handler(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Json<SubscriptionStatus> {
    Json(state.entitlements.status(user_id).await)
}
