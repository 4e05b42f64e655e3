//! Telegram Bot API HTTP client.
//!
//! Covers the three methods the relay needs: `getMe` for startup
//! validation, `sendMessage` for replies, and `sendChatAction` for the
//! typing indicator. Every Bot API response arrives in the same envelope
//! (`ok` flag plus either `result` or `description`).

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use super::TelegramError;

const API_BASE: &str = "https://api.telegram.org";

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct ApiEnvelope<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    description: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn into_result(self) -> Result<T, TelegramError> {
        if !self.ok {
            return Err(TelegramError::Api {
                description: self
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }
        self.result.ok_or(TelegramError::EmptyResult)
    }
}

/// The bot's own identity, from `getMe`.
#[derive(Debug, Clone, Deserialize)]
pub struct BotProfile {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Minimal `sendMessage` result; only used to confirm delivery.
#[derive(Debug, Deserialize)]
pub struct SentMessage {
    pub message_id: i64,
}

/// HTTP client for the Telegram Bot API.
///
/// # Token Security
///
/// The bot token is embedded in every request URL, so this type does NOT
/// derive Debug.
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
}

impl TelegramClient {
    /// Create a client for the given bot token against the public API.
    pub fn new(token: &str) -> Self {
        Self::with_base_url(token, API_BASE)
    }

    /// Create a client against an alternate API host (for tests and
    /// self-hosted Bot API servers).
    pub fn with_base_url(token: &str, base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/bot{}", base.trim_end_matches('/'), token),
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<T, TelegramError> {
        let url = format!("{}/{}", self.base_url, method);
        let envelope: ApiEnvelope<T> = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await?
            .json()
            .await?;
        envelope.into_result()
    }

    /// Validate the token and fetch the bot's identity.
    pub async fn get_me(&self) -> Result<BotProfile, TelegramError> {
        self.call("getMe", &json!({})).await
    }

    /// Send a plain-text reply to a chat.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
    ) -> Result<SentMessage, TelegramError> {
        self.call(
            "sendMessage",
            &json!({ "chat_id": chat_id, "text": text }),
        )
        .await
    }

    /// Show the "typing..." indicator in a chat. The indicator expires on
    /// its own after ~5 seconds, so it must be re-sent while work is
    /// pending.
    pub async fn send_typing(&self, chat_id: i64) -> Result<(), TelegramError> {
        // sendChatAction returns a bare boolean as its result.
        let _: bool = self
            .call(
                "sendChatAction",
                &json!({ "chat_id": chat_id, "action": "typing" }),
            )
            .await?;
        Ok(())
    }
}
