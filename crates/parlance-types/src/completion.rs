//! Completion request/response types for the remote language-model call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::turn::Turn;

/// Request to the completion service for one windowed conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Turn>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Response from the completion service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub content: String,
    pub model: String,
}

/// Errors from the completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited by provider")]
    RateLimited,

    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("response deserialization failed: {0}")]
    Deserialization(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
