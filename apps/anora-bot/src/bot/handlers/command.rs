use crate::bot::keyboards::open_app_keyboard;
use crate::bot::texts;
use crate::AppState;
use teloxide::types::ChatId;
use tracing::{error, info};

pub async fn handle_start(state: &AppState, chat_id: ChatId) {
    info!("/start in chat {}", chat_id.0);
    let keyboard = open_app_keyboard(state.webapp_url.clone());
    if let Err(e) = state
        .messenger
        .send_keyboard(chat_id, texts::WELCOME, keyboard)
        .await
    {
        error!("Failed to send welcome on /start: {}", e);
    }
}
