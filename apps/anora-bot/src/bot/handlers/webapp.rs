use crate::bot::texts;
use crate::error::{BotError, BotResult};
use crate::models::invoice::Invoice;
use crate::AppState;
use anora_shared::webapp::WebAppRequest;
use teloxide::types::ChatId;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum WebAppAction {
    RequestPayment { amount: u32, description: String },
    /// `None` means the sender is asking about themselves.
    CheckSubscription { user_id: Option<i64> },
}

impl TryFrom<WebAppRequest> for WebAppAction {
    type Error = BotError;

    fn try_from(req: WebAppRequest) -> BotResult<Self> {
        match req.action.as_deref() {
            Some("request_payment") => Ok(WebAppAction::RequestPayment {
                amount: req.amount_or_default(),
                description: req.description_or_default().to_string(),
            }),
            Some("check_subscription") => Ok(WebAppAction::CheckSubscription {
                user_id: req.user_id,
            }),
            _ => Err(BotError::UnknownAction(req.action_label().to_string())),
        }
    }
}

/// Entry point for `web_app_data` messages. Never fails: every error ends up
/// as a reply in `chat_id`.
pub async fn handle_web_app_data(state: &AppState, chat_id: ChatId, user_id: i64, data: &str) {
    if let Err(e) = process_web_app_data(state, chat_id, user_id, data).await {
        report_failure(state, chat_id, &e).await;
    }
}

pub async fn process_web_app_data(
    state: &AppState,
    chat_id: ChatId,
    user_id: i64,
    data: &str,
) -> BotResult<()> {
    let request: WebAppRequest = serde_json::from_str(data)?;
    info!("Received web app data from user {}: {:?}", user_id, request);
    run_request(state, chat_id, user_id, request).await
}

pub async fn run_request(
    state: &AppState,
    chat_id: ChatId,
    user_id: i64,
    request: WebAppRequest,
) -> BotResult<()> {
    match WebAppAction::try_from(request)? {
        WebAppAction::RequestPayment {
            amount,
            description,
        } => request_payment(state, chat_id, user_id, amount, &description).await,
        WebAppAction::CheckSubscription { user_id: target } => {
            check_subscription(state, chat_id, target.unwrap_or(user_id)).await
        }
    }
}

async fn request_payment(
    state: &AppState,
    chat_id: ChatId,
    user_id: i64,
    amount: u32,
    description: &str,
) -> BotResult<()> {
    let invoice = Invoice::subscription(
        user_id,
        amount,
        description,
        state.invoice_photo_url.clone(),
    );
    state
        .messenger
        .send_invoice(chat_id, &invoice)
        .await
        .map_err(|e| BotError::InvoiceCreation(Box::new(e)))?;

    info!(
        "Sent invoice to user {} for {} {}",
        user_id, amount, invoice.currency
    );
    Ok(())
}

async fn check_subscription(state: &AppState, chat_id: ChatId, user_id: i64) -> BotResult<()> {
    let status = state.entitlements.status(user_id).await;
    info!(
        "Subscription status for user {}: {}",
        user_id, status.has_access
    );
    debug!("Status available at /webapp/status/{}: {:?}", user_id, status);

    state
        .messenger
        .send_text(chat_id, &texts::subscription_status(status.has_access))
        .await
}

/// Tells the user something went wrong. The cause only goes to the log.
pub async fn report_failure(state: &AppState, chat_id: ChatId, err: &BotError) {
    let text = match err {
        BotError::Decode(_) => texts::DECODE_ERROR.to_string(),
        BotError::UnknownAction(action) => texts::unknown_action(action),
        BotError::InvoiceCreation(_) => texts::PAYMENT_CREATION_ERROR.to_string(),
        _ => texts::GENERIC_ERROR.to_string(),
    };

    if err.is_client_error() {
        warn!("Rejected web app data in chat {}: {}", chat_id.0, err);
    } else {
        error!("Web app request in chat {} failed: {}", chat_id.0, err);
    }

    if let Err(e) = state.messenger.send_text(chat_id, &text).await {
        error!("Failed to report error to chat {}: {}", chat_id.0, e);
    }
}
