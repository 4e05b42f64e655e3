//! Telegram webhook handler.
//!
//! Receives one `Update` per request, runs the turn (or command), and
//! delivers the reply via the Bot API. Updates without a usable text
//! message are acknowledged immediately without touching the Telegram
//! client, so it stays uninitialized on chatter the relay ignores.
//!
//! Telegram redelivers updates that don't get a 2xx, so processing
//! failures after the turn has run are logged rather than surfaced: a
//! non-2xx here would replay the whole turn.

use axum::extract::State;
use axum::Json;

use parlance_infra::telegram::update::{Command, Update};

use crate::http::error::AppError;
use crate::state::AppState;

/// Greeting for `/start`, personalized when the sender has a username.
fn start_greeting(name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Hey {name}! What's up?"),
        None => "Hey! What's up?".to_string(),
    }
}

/// Confirmation for `/clear`.
const CLEAR_REPLY: &str = "Memory wiped. Clean slate, what's next?";

/// POST /telegram/webhook - Process one Telegram update.
pub async fn receive_update(
    State(state): State<AppState>,
    Json(update): Json<Update>,
) -> Result<&'static str, AppError> {
    // Acknowledge anything that isn't a text message from a user.
    let Some(message) = update.message else {
        return Ok("ok");
    };
    let Some(text) = message.text.clone() else {
        return Ok("ok");
    };
    let Some(interactor) = message.interactor() else {
        return Ok("ok");
    };
    let chat_id = message.chat.id;

    // First point that needs Telegram: initialization failure is a 500 so
    // Telegram redelivers once the token problem is fixed.
    let client = state
        .telegram
        .get_or_init()
        .await
        .map_err(|e| AppError::Internal(format!("telegram client unavailable: {e}")))?;

    let reply = match message.command() {
        Some(Command::Start) => {
            state.orchestrator.handle_reset(chat_id, &interactor).await;
            start_greeting(interactor.display_name.as_deref())
        }
        Some(Command::Clear) => {
            state.orchestrator.handle_reset(chat_id, &interactor).await;
            CLEAR_REPLY.to_string()
        }
        None => {
            state
                .orchestrator
                .handle_message(chat_id, &interactor, &text)
                .await
        }
    };

    if let Err(e) = client.send_message(chat_id, &reply).await {
        tracing::error!(chat_id, error = %e, "reply delivery failed");
    }

    Ok("ok")
}
