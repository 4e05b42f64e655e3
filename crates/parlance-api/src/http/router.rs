//! Axum router configuration with middleware.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the webhook server router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/telegram/webhook", post(handlers::webhook::receive_update))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use parlance_infra::config::{Config, DEFAULT_MODEL};
    use parlance_infra::llm::openrouter::DEFAULT_BASE_URL;

    async fn test_state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            telegram_bot_token: "123:test-token".to_string(),
            openrouter_api_key: "sk-or-test".to_string(),
            openrouter_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            data_dir: dir.path().to_path_buf(),
            host: "127.0.0.1".to_string(),
            port: 0,
        };
        let state = AppState::init(&config).await.unwrap();
        std::mem::forget(dir);
        state
    }

    fn webhook_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/telegram/webhook")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = build_router(test_state().await);
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["status"], "ok");
    }

    #[tokio::test]
    async fn test_malformed_payload_is_rejected() {
        let router = build_router(test_state().await);
        let response = router
            .oneshot(webhook_request("this is not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_without_message_is_acknowledged() {
        let router = build_router(test_state().await);
        let response = router
            .oneshot(webhook_request(r#"{"update_id": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_non_text_message_is_acknowledged() {
        // A sticker message: no text, so no Telegram client init, no turn.
        let router = build_router(test_state().await);
        let body = r#"{
            "update_id": 2,
            "message": {
                "message_id": 10,
                "from": {"id": 1, "first_name": "Ada"},
                "chat": {"id": 5},
                "sticker": {"file_id": "abc"}
            }
        }"#;
        let response = router.oneshot(webhook_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
