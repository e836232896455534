use crate::models::payment::PaymentType;
use teloxide::types::LabeledPrice;
use url::Url;

pub const INVOICE_TITLE: &str = "🎨 Anora Art - Premium access";
pub const PRICE_LABEL: &str = "Anora Art subscription";
/// Telegram Stars.
pub const STARS_CURRENCY: &str = "XTR";
pub const START_PARAMETER: &str = "subscription";
pub const PHOTO_WIDTH: u32 = 400;
pub const PHOTO_HEIGHT: u32 = 300;

/// Everything `sendInvoice` needs for a Stars subscription. No provider token
/// is carried: Stars invoices are sent without one.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    pub payload: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub start_parameter: String,
    pub photo_url: Url,
    pub photo_width: u32,
    pub photo_height: u32,
}

impl Invoice {
    pub fn subscription(user_id: i64, amount: u32, description: &str, photo_url: Url) -> Self {
        Self {
            title: INVOICE_TITLE.to_string(),
            description: description.to_string(),
            payload: PaymentType::Subscription.to_payload_string(user_id),
            currency: STARS_CURRENCY.to_string(),
            prices: vec![LabeledPrice {
                label: PRICE_LABEL.to_string(),
                amount,
            }],
            start_parameter: START_PARAMETER.to_string(),
            photo_url,
            photo_width: PHOTO_WIDTH,
            photo_height: PHOTO_HEIGHT,
        }
    }

    pub fn total_amount(&self) -> u32 {
        self.prices.iter().map(|p| p.amount).sum()
    }
}
