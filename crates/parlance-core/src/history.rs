//! Degrading wrapper over the conversation repository.
//!
//! The relay trades durability for availability: a store failure must
//! never block a user-visible reply. `HistoryStore` absorbs repository
//! errors here -- load degrades to an empty record, save to a no-op --
//! while recording every swallowed error through tracing so degraded
//! storage stays operator-visible.

use parlance_types::conversation::{ChatId, Interactor, RecordMeta};
use parlance_types::turn::Turn;
use tracing::error;

use crate::repository::conversation::ConversationRepository;

/// Availability-first view of the conversation store.
pub struct HistoryStore<R: ConversationRepository> {
    repo: R,
}

impl<R: ConversationRepository> HistoryStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Load a chat's history and metadata; a failed read degrades to
    /// `(empty, empty)` as if the chat were new.
    pub async fn load(&self, chat_id: ChatId) -> (Vec<Turn>, RecordMeta) {
        match self.repo.load(chat_id).await {
            Ok(loaded) => loaded,
            Err(e) => {
                error!(chat_id, error = %e, "history load failed, degrading to empty record");
                (Vec::new(), RecordMeta::default())
            }
        }
    }

    /// Persist a chat's full history; a failed write is dropped after
    /// being logged.
    pub async fn save(
        &self,
        chat_id: ChatId,
        history: &[Turn],
        interactor: &Interactor,
        is_reset: bool,
        prior_meta: Option<&RecordMeta>,
    ) {
        if let Err(e) = self
            .repo
            .save(chat_id, history, interactor, is_reset, prior_meta)
            .await
        {
            error!(
                chat_id,
                interactor_id = interactor.id,
                error = %e,
                "history save failed, update lost"
            );
        }
    }
}
