//! SQLite conversation repository implementation.
//!
//! Implements `ConversationRepository` from `parlance-core` using sqlx with
//! split read/write pools. The history is stored as one JSON document per
//! chat (the record's document shape), with provenance metadata broken out
//! into columns and unrecognized fields preserved in an `extra` JSON map.

use chrono::{DateTime, Utc};
use sqlx::Row;

use parlance_core::repository::conversation::ConversationRepository;
use parlance_types::conversation::{ChatId, Interactor, RecordMeta};
use parlance_types::error::RepositoryError;
use parlance_types::turn::Turn;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct ConversationRow {
    history: String,
    creator_id: Option<String>,
    creator_name: Option<String>,
    last_interactor_id: Option<String>,
    last_interactor_name: Option<String>,
    last_updated_at: String,
    extra: String,
}

impl ConversationRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            history: row.try_get("history")?,
            creator_id: row.try_get("creator_id")?,
            creator_name: row.try_get("creator_name")?,
            last_interactor_id: row.try_get("last_interactor_id")?,
            last_interactor_name: row.try_get("last_interactor_name")?,
            last_updated_at: row.try_get("last_updated_at")?,
            extra: row.try_get("extra")?,
        })
    }

    fn into_record(self) -> Result<(Vec<Turn>, RecordMeta), RepositoryError> {
        let history: Vec<Turn> = serde_json::from_str(&self.history)
            .map_err(|e| RepositoryError::Query(format!("corrupt history document: {e}")))?;
        let extra: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&self.extra)
                .map_err(|e| RepositoryError::Query(format!("corrupt extra map: {e}")))?;
        let last_updated_at = parse_datetime(&self.last_updated_at)?;

        let meta = RecordMeta {
            creator_id: self.creator_id,
            creator_name: self.creator_name,
            last_interactor_id: self.last_interactor_id,
            last_interactor_name: self.last_interactor_name,
            last_updated_at: Some(last_updated_at),
            extra,
        };
        Ok((history, meta))
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

/// Resolve the creator fields for an upsert.
///
/// Reset stamps the current interactor as creator; otherwise prior creator
/// provenance threads through unchanged, with the current interactor as a
/// fallback for records that never recorded one.
fn resolve_creator(
    is_reset: bool,
    prior_meta: Option<&RecordMeta>,
    interactor_id: &str,
    interactor_name: &str,
) -> (Option<String>, Option<String>) {
    if is_reset {
        return (
            Some(interactor_id.to_string()),
            Some(interactor_name.to_string()),
        );
    }
    match prior_meta {
        Some(prior) if prior.has_creator() => {
            (prior.creator_id.clone(), prior.creator_name.clone())
        }
        _ => (
            Some(interactor_id.to_string()),
            Some(interactor_name.to_string()),
        ),
    }
}

// ---------------------------------------------------------------------------
// ConversationRepository implementation
// ---------------------------------------------------------------------------

impl ConversationRepository for SqliteConversationRepository {
    async fn load(
        &self,
        chat_id: ChatId,
    ) -> Result<(Vec<Turn>, RecordMeta), RepositoryError> {
        let row = sqlx::query("SELECT * FROM conversations WHERE chat_id = ?")
            .bind(chat_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let conv_row = ConversationRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                conv_row.into_record()
            }
            // No record is "new chat", not an error.
            None => Ok((Vec::new(), RecordMeta::default())),
        }
    }

    async fn save(
        &self,
        chat_id: ChatId,
        history: &[Turn],
        interactor: &Interactor,
        is_reset: bool,
        prior_meta: Option<&RecordMeta>,
    ) -> Result<(), RepositoryError> {
        let interactor_id = interactor.id.to_string();
        let interactor_name = interactor
            .display_name
            .clone()
            .unwrap_or_else(|| "N/A".to_string());
        let (creator_id, creator_name) =
            resolve_creator(is_reset, prior_meta, &interactor_id, &interactor_name);

        let history_json = serde_json::to_string(history)
            .map_err(|e| RepositoryError::Query(format!("history serialization: {e}")))?;
        let extra_json = serde_json::to_string(
            &prior_meta.map(|m| m.extra.clone()).unwrap_or_default(),
        )
        .map_err(|e| RepositoryError::Query(format!("extra serialization: {e}")))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"INSERT INTO conversations
                   (chat_id, history, creator_id, creator_name,
                    last_interactor_id, last_interactor_name, last_updated_at, extra)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(chat_id) DO UPDATE SET
                   history = excluded.history,
                   creator_id = excluded.creator_id,
                   creator_name = excluded.creator_name,
                   last_interactor_id = excluded.last_interactor_id,
                   last_interactor_name = excluded.last_interactor_name,
                   last_updated_at = excluded.last_updated_at,
                   extra = excluded.extra"#,
        )
        .bind(chat_id.to_string())
        .bind(history_json)
        .bind(&creator_id)
        .bind(&creator_name)
        .bind(&interactor_id)
        .bind(&interactor_name)
        .bind(now)
        .bind(extra_json)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        tracing::debug!(
            chat_id,
            interactor_id = %interactor_id,
            is_reset,
            turns = history.len(),
            "conversation saved"
        );
        Ok(())
    }
}
