//! Telegram Bot API integration.
//!
//! - `update`: incoming webhook payload types and command parsing
//! - `client`: thin HTTP client over the Bot API (sendMessage, sendChatAction, getMe)
//! - `lazy`: lazily-initialized shared client cell

pub mod client;
pub mod lazy;
pub mod update;

/// Errors from the Telegram Bot API client.
#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    /// Network or HTTP-level failure.
    #[error("telegram transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with `ok: false`.
    #[error("telegram api error: {description}")]
    Api { description: String },

    /// The API answered `ok: true` but the result payload was missing.
    #[error("telegram api returned an empty result")]
    EmptyResult,
}
