//! Conversation repository trait definition.

use parlance_types::conversation::{ChatId, Interactor, RecordMeta};
use parlance_types::error::RepositoryError;
use parlance_types::turn::Turn;

/// Trait for the per-chat conversation document store.
///
/// One document per chat, keyed by [`ChatId`]. Uses native async fn in
/// traits (RPITIT); the concrete implementation lives in parlance-infra.
pub trait ConversationRepository: Send + Sync {
    /// Load the persisted history and provenance metadata for a chat.
    ///
    /// A chat with no record yields `(empty, empty)` -- that is a signal
    /// for "new chat", not an error.
    fn load(
        &self,
        chat_id: ChatId,
    ) -> impl std::future::Future<Output = Result<(Vec<Turn>, RecordMeta), RepositoryError>> + Send;

    /// Upsert the full record for a chat.
    ///
    /// When `is_reset` is true, creator provenance is stamped from
    /// `interactor`. Otherwise creator fields thread through unchanged from
    /// `prior_meta`; if the prior metadata carries no creator, the current
    /// interactor becomes the creator. Last-interactor fields and the
    /// update timestamp are always refreshed.
    fn save(
        &self,
        chat_id: ChatId,
        history: &[Turn],
        interactor: &Interactor,
        is_reset: bool,
        prior_meta: Option<&RecordMeta>,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
