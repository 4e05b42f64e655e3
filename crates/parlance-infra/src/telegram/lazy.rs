//! Lazily-initialized shared Telegram client.
//!
//! The relay holds a [`TelegramCell`] from startup but does not open a
//! connection or validate the token until the first webhook actually needs
//! the client. Initialization runs at most once across concurrent callers;
//! a failed attempt is not cached, so the next request retries.

use std::sync::Arc;

use tokio::sync::OnceCell;

use parlance_core::signal::LivenessSink;
use parlance_types::conversation::ChatId;
use parlance_types::error::SignalError;

use super::client::TelegramClient;
use super::TelegramError;

/// Shared cell producing a validated [`TelegramClient`] on first use.
pub struct TelegramCell {
    token: String,
    cell: OnceCell<Arc<TelegramClient>>,
}

impl TelegramCell {
    pub fn new(token: String) -> Self {
        Self {
            token,
            cell: OnceCell::new(),
        }
    }

    /// Get the client, initializing and validating it on first call.
    ///
    /// Validation is a `getMe` round trip; concurrent first callers are
    /// coalesced into a single attempt by the cell.
    pub async fn get_or_init(&self) -> Result<Arc<TelegramClient>, TelegramError> {
        self.cell
            .get_or_try_init(|| async {
                let client = Arc::new(TelegramClient::new(&self.token));
                let me = client.get_me().await?;
                tracing::info!(
                    bot_id = me.id,
                    bot_username = me.username.as_deref().unwrap_or(""),
                    "telegram client initialized"
                );
                Ok(client)
            })
            .await
            .cloned()
    }
}

impl LivenessSink for TelegramCell {
    async fn signal_processing(&self, chat_id: ChatId) -> Result<(), SignalError> {
        let client = self
            .get_or_init()
            .await
            .map_err(|e| SignalError(e.to_string()))?;
        client
            .send_typing(chat_id)
            .await
            .map_err(|e| SignalError(e.to_string()))
    }
}
