use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("malformed web app payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("failed to create invoice: {0}")]
    InvoiceCreation(#[source] Box<BotError>),

    #[error("telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),
}

impl BotError {
    /// Rejected because of what the mini app sent, not because a call failed.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            BotError::Decode(_) | BotError::MissingField(_) | BotError::UnknownAction(_)
        )
    }
}

pub type BotResult<T> = Result<T, BotError>;
