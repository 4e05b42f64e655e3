//! Liveness signaling during a pending completion call.
//!
//! While the completion service works, the user sees a periodic
//! "processing" indicator. The loop runs as its own task, joined to the
//! critical path only by a [`CancellationToken`] -- it observes the token
//! at every wait point and is guaranteed to terminate within one interval
//! of cancellation.

use std::sync::Arc;
use std::time::Duration;

use parlance_types::conversation::ChatId;
use parlance_types::error::SignalError;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Interval between indicator deliveries. Shorter than the messaging
/// platform's indicator expiry (~5s for Telegram's chat action).
pub const SIGNAL_INTERVAL: Duration = Duration::from_secs(4);

/// Trait for the user-facing "processing" indicator channel.
pub trait LivenessSink: Send + Sync {
    /// Deliver one processing indicator to the chat.
    fn signal_processing(
        &self,
        chat_id: ChatId,
    ) -> impl std::future::Future<Output = Result<(), SignalError>> + Send;
}

/// Emit the processing indicator every [`SIGNAL_INTERVAL`] until the token
/// is cancelled.
///
/// A delivery failure ends the loop silently (logged at debug); it never
/// escalates to the orchestrator. The first indicator is sent immediately
/// so the user sees feedback before the first interval elapses.
pub async fn run_liveness<S: LivenessSink>(
    sink: Arc<S>,
    chat_id: ChatId,
    token: CancellationToken,
) {
    loop {
        if token.is_cancelled() {
            return;
        }
        if let Err(e) = sink.signal_processing(chat_id).await {
            debug!(chat_id, error = %e, "liveness delivery failed, stopping signaler");
            return;
        }
        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(SIGNAL_INTERVAL) => {}
        }
    }
}
