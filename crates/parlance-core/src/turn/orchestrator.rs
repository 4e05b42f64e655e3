//! Turn orchestrator for Parlance.
//!
//! `TurnOrchestrator` coordinates one conversation turn per inbound
//! message: load and normalize the persisted record, append the user
//! turn, build the bounded window, run the completion call concurrently
//! with the liveness signaler, merge the result back with correct
//! provenance, and hand the reply text to the transport layer.
//!
//! No turn state is persisted; each invocation is transient. Turns on the
//! same chat are serialized through [`ChatLocks`].

use std::sync::Arc;

use parlance_types::conversation::{ChatId, Interactor, RecordMeta};
use parlance_types::turn::Turn;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::history::HistoryStore;
use crate::llm::provider::CompletionProvider;
use crate::llm::service::CompletionService;
use crate::repository::conversation::ConversationRepository;
use crate::signal::{run_liveness, LivenessSink, SIGNAL_INTERVAL};
use crate::turn::locks::ChatLocks;
use crate::window::build_window;

/// Character limit for an inbound user message.
pub const MAX_USER_MESSAGE_CHARS: usize = 2000;

/// Conversation turns kept in the completion window (system turn exempt).
pub const MAX_WINDOW_TURNS: usize = 20;

/// Behavioral directive seeded as the single system turn of every
/// conversation. Never sent to or overwritten by user input.
pub const SYSTEM_PROMPT: &str = "You are Parlance, a sharp and friendly chat companion. \
Answer casually and concisely, like you are texting a friend, with the occasional witty remark. \
Skip formalities, never lecture, and keep replies short unless the question really needs more.";

/// Reply for a message exceeding the length limit.
pub const REJECTION_REPLY: &str =
    "Whoa, that's a bit long for me. Try keeping it under 2000 characters, okay?";

/// Orchestrates one conversation turn per inbound message.
///
/// Generic over the repository, completion provider, and liveness sink so
/// the core crate stays free of infrastructure; the API layer pins the
/// concrete implementations.
pub struct TurnOrchestrator<R, P, S>
where
    R: ConversationRepository,
    P: CompletionProvider,
    S: LivenessSink + 'static,
{
    store: HistoryStore<R>,
    completion: CompletionService<P>,
    sink: Arc<S>,
    locks: ChatLocks,
}

impl<R, P, S> TurnOrchestrator<R, P, S>
where
    R: ConversationRepository,
    P: CompletionProvider,
    S: LivenessSink + 'static,
{
    pub fn new(repo: R, completion: CompletionService<P>, sink: Arc<S>) -> Self {
        Self {
            store: HistoryStore::new(repo),
            completion,
            sink,
            locks: ChatLocks::new(),
        }
    }

    /// Run one conversation turn and return the reply text.
    ///
    /// Never fails: store and completion errors degrade internally, so a
    /// reply is always produced.
    pub async fn handle_message(
        &self,
        chat_id: ChatId,
        interactor: &Interactor,
        text: &str,
    ) -> String {
        // Reject before touching any state.
        let chars = text.chars().count();
        if chars > MAX_USER_MESSAGE_CHARS {
            warn!(
                chat_id,
                interactor_id = interactor.id,
                chars,
                "message over length limit, rejecting"
            );
            return REJECTION_REPLY.to_string();
        }

        let _turn_guard = self.locks.acquire(chat_id).await;

        let (mut history, meta) = self.store.load(chat_id).await;
        let first_interaction = history.is_empty() && meta.is_empty();

        if history.is_empty() {
            if !first_interaction {
                info!(chat_id, "record exists but history is empty, reseeding system turn");
            } else {
                debug!(chat_id, "first interaction, seeding system turn");
            }
            history.push(Turn::system(SYSTEM_PROMPT));
        }

        history.push(Turn::user(text));
        let window = build_window(&history, MAX_WINDOW_TURNS);

        let reply = self.complete_with_liveness(chat_id, window).await;
        history.push(Turn::assistant(reply.clone()));

        let prior_meta = (!first_interaction).then_some(&meta);
        self.store
            .save(chat_id, &history, interactor, first_interaction, prior_meta)
            .await;

        reply
    }

    /// Replace the chat's history with a single fresh system turn,
    /// re-stamping creator provenance to the resetting user.
    pub async fn handle_reset(&self, chat_id: ChatId, interactor: &Interactor) {
        let _turn_guard = self.locks.acquire(chat_id).await;

        info!(chat_id, interactor_id = interactor.id, "resetting conversation");
        let history = vec![Turn::system(SYSTEM_PROMPT)];
        self.store
            .save(chat_id, &history, interactor, true, None)
            .await;
    }

    /// Await the completion while the liveness signaler runs alongside it.
    ///
    /// Only the completion result is awaited; the signaler is cancelled
    /// once it resolves and given at most one interval to wind down
    /// before being abandoned.
    async fn complete_with_liveness(&self, chat_id: ChatId, window: Vec<Turn>) -> String {
        let token = CancellationToken::new();
        let signaler = tokio::spawn(run_liveness(
            Arc::clone(&self.sink),
            chat_id,
            token.clone(),
        ));

        let reply = self.completion.reply_to(window).await;

        token.cancel();
        if tokio::time::timeout(SIGNAL_INTERVAL, signaler).await.is_err() {
            debug!(chat_id, "liveness signaler abandoned after teardown timeout");
        }

        reply
    }
}
