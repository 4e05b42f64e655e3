//! Completion service with fixed sampling parameters and fallback.
//!
//! Wraps a [`CompletionProvider`] so that the orchestrator never observes
//! a completion failure: any transport, auth, or service error is logged
//! and substituted with a fixed user-safe reply. The fallback is then
//! persisted like a genuine assistant turn (see DESIGN.md for the
//! rationale behind keeping that behavior).

use parlance_types::completion::CompletionRequest;
use parlance_types::turn::Turn;
use tracing::{debug, warn};

use crate::llm::provider::CompletionProvider;

/// Sampling temperature for every completion call. Fixed, not request-derived.
pub const TEMPERATURE: f32 = 1.0;

/// Output-length cap for every completion call.
pub const MAX_COMPLETION_TOKENS: u32 = 500;

/// Reply substituted when the completion service is unreachable or errors.
pub const FALLBACK_REPLY: &str =
    "Ah, my brain's a bit fuzzy right now. Ask me again in a bit, okay?";

/// Fallback-wrapping completion caller.
pub struct CompletionService<P: CompletionProvider> {
    provider: P,
    model: String,
}

impl<P: CompletionProvider> CompletionService<P> {
    pub fn new(provider: P, model: String) -> Self {
        Self { provider, model }
    }

    /// Access the wrapped provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Request a reply for the given window.
    ///
    /// Never fails: provider errors (and blank responses) degrade to
    /// [`FALLBACK_REPLY`], recorded through tracing.
    pub async fn reply_to(&self, window: Vec<Turn>) -> String {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: window,
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: Some(TEMPERATURE),
        };

        match self.provider.complete(&request).await {
            Ok(response) => {
                let content = response.content.trim();
                if content.is_empty() {
                    warn!(
                        provider = self.provider.name(),
                        model = %response.model,
                        "completion returned empty content, substituting fallback"
                    );
                    FALLBACK_REPLY.to_string()
                } else {
                    debug!(
                        provider = self.provider.name(),
                        model = %response.model,
                        chars = content.len(),
                        "completion received"
                    );
                    content.to_string()
                }
            }
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    model = %self.model,
                    error = %e,
                    "completion failed, substituting fallback"
                );
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
