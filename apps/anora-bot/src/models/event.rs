use teloxide::types::{ChatId, Message, PreCheckoutQuery};

/// Every update the bot reacts to. Anything else is left to the dispatcher's
/// default handler.
#[derive(Debug, Clone)]
pub enum BotEvent {
    Start {
        chat_id: ChatId,
    },
    WebAppData {
        chat_id: ChatId,
        user_id: i64,
        data: String,
    },
    PreCheckout(PreCheckoutQuery),
    PaymentSettled {
        chat_id: ChatId,
        user_id: i64,
        total_amount: u32,
        currency: String,
    },
}

impl BotEvent {
    pub fn from_message(msg: &Message) -> Option<Self> {
        let chat_id = msg.chat.id;
        // Private chats share the user's id.
        let user_id = msg
            .from
            .as_ref()
            .map(|u| u.id.0 as i64)
            .unwrap_or(chat_id.0);

        if let Some(web_app_data) = msg.web_app_data() {
            return Some(BotEvent::WebAppData {
                chat_id,
                user_id,
                data: web_app_data.data.clone(),
            });
        }

        if let Some(payment) = msg.successful_payment() {
            return Some(BotEvent::PaymentSettled {
                chat_id,
                user_id,
                total_amount: payment.total_amount,
                currency: payment.currency.clone(),
            });
        }

        msg.text()
            .filter(|text| is_start_command(text))
            .map(|_| BotEvent::Start { chat_id })
    }
}

/// Matches `/start`, `/start@bot_name` and `/start <param>`.
pub fn is_start_command(text: &str) -> bool {
    text.split_whitespace()
        .next()
        .and_then(|cmd| cmd.split('@').next())
        .is_some_and(|cmd| cmd == "/start")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::chat_message;
    use serde_json::json;

    #[test]
    fn web_app_data_becomes_event() {
        let msg = chat_message(
            json!({"web_app_data": {"data": "{\"action\":\"check_subscription\"}", "button_text": "Open"}}),
            Some(91),
        );

        match BotEvent::from_message(&msg) {
            Some(BotEvent::WebAppData {
                chat_id,
                user_id,
                data,
            }) => {
                assert_eq!(chat_id, ChatId(77));
                assert_eq!(user_id, 91);
                assert_eq!(data, r#"{"action":"check_subscription"}"#);
            }
            other => panic!("expected web app data, got {:?}", other),
        }
    }

    #[test]
    fn sender_falls_back_to_chat_id() {
        let msg = chat_message(json!({"web_app_data": {"data": "{}", "button_text": "Open"}}), None);

        assert!(matches!(
            BotEvent::from_message(&msg),
            Some(BotEvent::WebAppData { user_id: 77, .. })
        ));
    }

    #[test]
    fn successful_payment_carries_amount_and_currency() {
        let msg = chat_message(
            json!({"successful_payment": {
                "currency": "XTR",
                "total_amount": 250,
                "invoice_payload": "subscription_91",
                "telegram_payment_charge_id": "tg-charge",
                "provider_payment_charge_id": "provider-charge",
                "is_recurring": false,
                "is_first_recurring": false
            }}),
            Some(91),
        );

        match BotEvent::from_message(&msg) {
            Some(BotEvent::PaymentSettled {
                chat_id,
                user_id,
                total_amount,
                currency,
            }) => {
                assert_eq!(chat_id, ChatId(77));
                assert_eq!(user_id, 91);
                assert_eq!(total_amount, 250);
                assert_eq!(currency, "XTR");
            }
            other => panic!("expected settled payment, got {:?}", other),
        }
    }

    #[test]
    fn only_start_text_is_an_event() {
        let start = chat_message(json!({"text": "/start ref_1"}), Some(91));
        assert!(matches!(
            BotEvent::from_message(&start),
            Some(BotEvent::Start { chat_id: ChatId(77) })
        ));

        for text in ["hello", "/help", "/started"] {
            let msg = chat_message(json!({ "text": text }), Some(91));
            assert!(BotEvent::from_message(&msg).is_none(), "{text}");
        }
    }

    #[test]
    fn recognizes_start_variants() {
        assert!(is_start_command("/start"));
        assert!(is_start_command("/start ref_42"));
        assert!(is_start_command("/start@anora_art_bot"));
        assert!(!is_start_command("/started"));
        assert!(!is_start_command("start"));
        assert!(!is_start_command(""));
    }
}
