use crate::error::BotResult;
use crate::models::invoice::Invoice;
use crate::models::payment::PreCheckoutVerdict;
use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardMarkup, PreCheckoutQuery};

/// Outbound Telegram calls made by the handlers.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<()>;

    async fn send_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> BotResult<()>;

    async fn send_invoice(&self, chat_id: ChatId, invoice: &Invoice) -> BotResult<()>;

    async fn answer_pre_checkout(
        &self,
        query: &PreCheckoutQuery,
        verdict: &PreCheckoutVerdict,
    ) -> BotResult<()>;
}

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> BotResult<()> {
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_keyboard(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: InlineKeyboardMarkup,
    ) -> BotResult<()> {
        self.bot
            .send_message(chat_id, text)
            .reply_markup(keyboard)
            .await?;
        Ok(())
    }

    async fn send_invoice(&self, chat_id: ChatId, invoice: &Invoice) -> BotResult<()> {
        let mut req = self.bot.send_invoice(
            chat_id,
            invoice.title.clone(),
            invoice.description.clone(),
            invoice.payload.clone(),
            invoice.currency.clone(),
            invoice.prices.clone(),
        );
        req.start_parameter = Some(invoice.start_parameter.clone());
        req.photo_url = Some(invoice.photo_url.clone());
        req.photo_width = Some(invoice.photo_width);
        req.photo_height = Some(invoice.photo_height);

        req.await?;
        Ok(())
    }

    async fn answer_pre_checkout(
        &self,
        query: &PreCheckoutQuery,
        verdict: &PreCheckoutVerdict,
    ) -> BotResult<()> {
        let mut req = self
            .bot
            .answer_pre_checkout_query(query.id.clone(), verdict.is_approved());
        req.error_message = verdict.error_message().map(str::to_string);

        req.await?;
        Ok(())
    }
}
