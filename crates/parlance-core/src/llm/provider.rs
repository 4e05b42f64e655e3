//! CompletionProvider trait definition.

use parlance_types::completion::{CompletionError, CompletionRequest, CompletionResponse};

/// Trait for completion-service backends.
///
/// Uses native async fn in traits (RPITIT). The relay never streams, so
/// this is a single request/response call. The concrete implementation
/// (OpenRouter over the OpenAI-compatible API) lives in parlance-infra.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openrouter").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, CompletionError>> + Send;
}
