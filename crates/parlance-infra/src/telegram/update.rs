//! Incoming webhook payload types.
//!
//! Mirrors the subset of the Telegram Bot API `Update` object the relay
//! cares about: text messages with their chat and sender. Everything else
//! (edits, stickers, channel posts) deserializes to a message-less update
//! and is acknowledged without processing.

use serde::Deserialize;

use parlance_types::conversation::Interactor;

/// One webhook delivery from Telegram.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

/// A message within an update. `text` is absent for media messages.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingMessage {
    pub message_id: i64,
    #[serde(default)]
    pub from: Option<User>,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Bot commands the relay understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Clear,
}

impl IncomingMessage {
    /// The sender as a domain interactor. None for messages without a
    /// `from` field (e.g. channel posts).
    pub fn interactor(&self) -> Option<Interactor> {
        self.from
            .as_ref()
            .map(|user| Interactor::new(user.id, user.username.clone()))
    }

    /// Parse a leading bot command from the message text.
    ///
    /// Accepts the `/command@BotName` form Telegram uses in group chats.
    pub fn command(&self) -> Option<Command> {
        let text = self.text.as_deref()?.trim();
        let first = text.split_whitespace().next()?;
        let name = first.strip_prefix('/')?;
        let name = name.split('@').next().unwrap_or(name);
        match name {
            "start" => Some(Command::Start),
            "clear" => Some(Command::Clear),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Update {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_text_message() {
        let update = parse(
            r#"{
                "update_id": 9001,
                "message": {
                    "message_id": 42,
                    "from": {"id": 100, "first_name": "Ada", "username": "ada"},
                    "chat": {"id": -500, "type": "group"},
                    "date": 1756500000,
                    "text": "hello there"
                }
            }"#,
        );
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, -500);
        assert_eq!(message.text.as_deref(), Some("hello there"));
        let interactor = message.interactor().unwrap();
        assert_eq!(interactor.id, 100);
        assert_eq!(interactor.display_name.as_deref(), Some("ada"));
    }

    #[test]
    fn test_parse_update_without_message() {
        let update = parse(r#"{"update_id": 9002, "edited_message": {"message_id": 1}}"#);
        assert!(update.message.is_none());
    }

    #[test]
    fn test_parse_message_without_text_or_username() {
        let update = parse(
            r#"{
                "update_id": 9003,
                "message": {
                    "message_id": 43,
                    "from": {"id": 101, "first_name": "Bob"},
                    "chat": {"id": 7},
                    "sticker": {"file_id": "abc"}
                }
            }"#,
        );
        let message = update.message.unwrap();
        assert!(message.text.is_none());
        assert!(message.interactor().unwrap().display_name.is_none());
    }

    fn message_with_text(text: &str) -> IncomingMessage {
        IncomingMessage {
            message_id: 1,
            from: None,
            chat: Chat { id: 1 },
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(message_with_text("/start").command(), Some(Command::Start));
        assert_eq!(message_with_text("/clear").command(), Some(Command::Clear));
        assert_eq!(
            message_with_text("/clear@ParlanceBot").command(),
            Some(Command::Clear)
        );
        assert_eq!(message_with_text("/start extra args").command(), Some(Command::Start));
        assert_eq!(message_with_text("/unknown").command(), None);
        assert_eq!(message_with_text("just chatting").command(), None);
        assert_eq!(message_with_text("say /start please").command(), None);
    }
}
