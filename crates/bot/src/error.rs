// Bot Errors

use mediaq_core::error::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// Network or HTTP-level failure talking to the bot API
    ///
    /// Never carries the request URL; it contains the bot token.
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),

    /// The bot API answered with `ok: false`
    ///
    /// `code` is 0 when the API omitted `error_code`.
    #[error("Bot API error {code}: {description}")]
    Api { code: i64, description: String },

    #[error(transparent)]
    App(#[from] AppError),
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Transport(err.without_url())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
