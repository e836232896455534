use crate::error::{BotError, BotResult};
use crate::messenger::Messenger;
use crate::models::invoice::Invoice;
use crate::models::payment::PreCheckoutVerdict;
use crate::services::entitlement_service::EntitlementService;
use crate::state::AppState;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use teloxide::types::{ChatId, InlineKeyboardMarkup, Message, PreCheckoutQuery};

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text(ChatId, String),
    Keyboard(ChatId, String, InlineKeyboardMarkup),
    Invoice(ChatId, Invoice),
    PreCheckout(String, PreCheckoutVerdict),
}

/// Records every outbound call instead of talking to Telegram.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<Sent>>,
    fail_invoices: bool,
    fail_next_text: AtomicBool,
}

impl RecordingMessenger {
    pub fn failing_invoices() -> Self {
        Self {
            fail_invoices: true,
            ..Self::default()
        }
    }

    /// The first `send_text` fails, later ones go through.
    pub fn failing_first_text() -> Self {
        Self {
            fail_next_text: AtomicBool::new(true),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text(_, text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

fn blocked() -> BotError {
    BotError::Telegram(teloxide::RequestError::Api(teloxide::ApiError::BotBlocked))
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<()> {
        if self.fail_next_text.swap(false, Ordering::SeqCst) {
            return Err(blocked());
        }
        self.record(Sent::Text(chat_id, text.to_string()));
        Ok(())
    }

    async fn send_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> BotResult<()> {
        self.record(Sent::Keyboard(chat_id, text.to_string(), keyboard));
        Ok(())
    }

    async fn send_invoice(&self, chat_id: ChatId, invoice: &Invoice) -> BotResult<()> {
        if self.fail_invoices {
            return Err(blocked());
        }
        self.record(Sent::Invoice(chat_id, invoice.clone()));
        Ok(())
    }

    async fn answer_pre_checkout(
        &self,
        query: &PreCheckoutQuery,
        verdict: &PreCheckoutVerdict,
    ) -> BotResult<()> {
        self.record(Sent::PreCheckout(query.invoice_payload.clone(), verdict.clone()));
        Ok(())
    }
}

pub fn state_with(messenger: Arc<RecordingMessenger>) -> AppState {
    AppState::new(
        messenger,
        EntitlementService::in_memory(),
        "https://anora.example/app".parse().unwrap(),
        "https://anora.example/cover.png".parse().unwrap(),
    )
}

pub fn pre_checkout_query(payload: &str) -> PreCheckoutQuery {
    serde_json::from_value(json!({
        "id": "query-1",
        "from": {"id": 77, "is_bot": false, "first_name": "Ann"},
        "currency": "XTR",
        "total_amount": 100,
        "invoice_payload": payload,
    }))
    .unwrap()
}

/// Bot API message in chat 77. `extra` holds the content fields (`text`,
/// `web_app_data`, ...).
pub fn chat_message(extra: Value, sender: Option<u64>) -> Message {
    let mut msg = json!({
        "message_id": 1,
        "date": 1_700_000_000,
        "chat": {"id": 77, "type": "private", "first_name": "Ann"},
    });
    if let Some(id) = sender {
        msg["from"] = json!({"id": id, "is_bot": false, "first_name": "Ann"});
    }
    if let (Some(msg), Some(extra)) = (msg.as_object_mut(), extra.as_object()) {
        msg.extend(extra.clone());
    }
    serde_json::from_value(msg).unwrap()
}
