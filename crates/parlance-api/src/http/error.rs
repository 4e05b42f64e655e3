//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Application-level error that maps to HTTP responses.
///
/// Kept deliberately small: malformed payloads are already rejected with
/// a 400 by axum's `Json` extractor before any handler runs, and per-turn
/// processing degrades internally. The only failure worth surfacing is
/// one Telegram should retry, which it does on a 5xx.
#[derive(Debug)]
pub enum AppError {
    /// Generic internal error.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal(message) = self;

        let body = json!({
            "error": {
                "code": "INTERNAL_ERROR",
                "message": message,
            }
        });

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
