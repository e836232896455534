use crate::bot::texts;
use crate::models::payment::PreCheckoutVerdict;
use crate::AppState;
use teloxide::types::{ChatId, PreCheckoutQuery};
use tracing::{debug, error, info};

pub async fn handle_pre_checkout(state: &AppState, query: &PreCheckoutQuery) {
    let payload = &query.invoice_payload;
    let verdict = PreCheckoutVerdict::for_payload(payload);

    match state.messenger.answer_pre_checkout(query, &verdict).await {
        Ok(_) if verdict.is_approved() => {
            info!("Pre-checkout query approved for payload: {}", payload)
        }
        Ok(_) => info!("Pre-checkout query rejected for payload: {}", payload),
        Err(e) => error!("Failed to answer pre_checkout_query: {}", e),
    }
}

pub async fn handle_successful_payment(
    state: &AppState,
    chat_id: ChatId,
    user_id: i64,
    total_amount: u32,
    currency: &str,
) {
    state.entitlements.grant(user_id).await;
    info!(
        "Successful payment from user {}: {} {}",
        user_id, total_amount, currency
    );

    if let Err(e) = state
        .messenger
        .send_text(chat_id, texts::PAYMENT_CONFIRMED)
        .await
    {
        error!("Failed to confirm payment to user {}: {}", user_id, e);
    }

    // The mini app picks this up from GET /webapp/status/{user_id}.
    let status = state.entitlements.status(user_id).await;
    debug!("Subscription activated: {:?}", status);
}
