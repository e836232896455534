use serde::{Deserialize, Serialize};

/// Messages exchanged with the Anora Art mini application.
pub mod webapp {
    use super::*;

    pub const DEFAULT_AMOUNT: u32 = 100;
    pub const DEFAULT_DESCRIPTION: &str = "Monthly subscription";

    /// Raw payload sent by the mini app, either through `sendData` or the
    /// inline HTTP route. Every field is optional on the wire; unknown keys
    /// are ignored.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct WebAppRequest {
        pub action: Option<String>,
        pub amount: Option<u32>,
        pub description: Option<String>,
        pub user_id: Option<i64>,
    }

    impl WebAppRequest {
        pub fn amount_or_default(&self) -> u32 {
            self.amount.unwrap_or(DEFAULT_AMOUNT)
        }

        pub fn description_or_default(&self) -> &str {
            self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
        }

        /// Action tag as the user should see it when it is not recognized.
        pub fn action_label(&self) -> &str {
            self.action.as_deref().unwrap_or("None")
        }
    }

    /// Body of `POST /webapp/inline`, used when the app was opened from an
    /// inline button and cannot call `sendData`.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct InlineRequest {
        pub query_id: String,
        #[serde(default)]
        pub data: WebAppRequest,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct InlineResponse {
        pub ok: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub error: Option<String>,
    }

    impl InlineResponse {
        pub fn ok() -> Self {
            Self { ok: true, error: None }
        }

        pub fn error(message: impl Into<String>) -> Self {
            Self {
                ok: false,
                error: Some(message.into()),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum MessageKind {
        SubscriptionStatus,
    }

    /// Premium status as the mini app stores it.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct SubscriptionStatus {
        #[serde(rename = "type")]
        pub kind: MessageKind,
        pub has_access: bool,
        pub user_id: i64,
    }

    impl SubscriptionStatus {
        pub fn new(user_id: i64, has_access: bool) -> Self {
            Self {
                kind: MessageKind::SubscriptionStatus,
                has_access,
                user_id,
            }
        }
    }
}
