pub mod command;
pub mod payment;
pub mod webapp;

use crate::models::event::BotEvent;
use crate::AppState;

pub async fn handle_event(event: BotEvent, state: &AppState) {
    match event {
        BotEvent::Start { chat_id } => command::handle_start(state, chat_id).await,
        BotEvent::WebAppData {
            chat_id,
            user_id,
            data,
        } => webapp::handle_web_app_data(state, chat_id, user_id, &data).await,
        BotEvent::PreCheckout(query) => payment::handle_pre_checkout(state, &query).await,
        BotEvent::PaymentSettled {
            chat_id,
            user_id,
            total_amount,
            currency,
        } => {
            payment::handle_successful_payment(state, chat_id, user_id, total_amount, &currency)
                .await
        }
    }
}
