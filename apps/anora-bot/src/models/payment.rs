use crate::bot::texts;

pub const SUBSCRIPTION_PAYLOAD_PREFIX: &str = "subscription_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Subscription,
}

impl PaymentType {
    pub fn to_payload_string(&self, user_id: i64) -> String {
        match self {
            PaymentType::Subscription => format!("{}{}", SUBSCRIPTION_PAYLOAD_PREFIX, user_id),
        }
    }

    /// Only the prefix is checked; the embedded id is never parsed.
    pub fn from_payload(payload: &str) -> Option<Self> {
        if payload.starts_with(SUBSCRIPTION_PAYLOAD_PREFIX) {
            Some(PaymentType::Subscription)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreCheckoutVerdict {
    Approve,
    Reject(String),
}

impl PreCheckoutVerdict {
    pub fn for_payload(payload: &str) -> Self {
        match PaymentType::from_payload(payload) {
            Some(_) => PreCheckoutVerdict::Approve,
            None => PreCheckoutVerdict::Reject(texts::INVALID_PAYMENT.to_string()),
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, PreCheckoutVerdict::Approve)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            PreCheckoutVerdict::Approve => None,
            PreCheckoutVerdict::Reject(reason) => Some(reason.as_str()),
        }
    }
}
