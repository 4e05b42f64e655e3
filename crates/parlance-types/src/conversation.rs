//! Persisted conversation record and provenance metadata.
//!
//! One [`ConversationRecord`] exists per chat, keyed by the platform chat
//! identifier. The record carries the full (never truncated) turn history
//! plus provenance: who created the conversation and who touched it last.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::turn::Turn;

/// Stable external chat identifier, used as the record key.
pub type ChatId = i64;

/// Identity of whoever triggered a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactor {
    pub id: i64,
    /// Platform display name; absent for users without one.
    pub display_name: Option<String>,
}

impl Interactor {
    pub fn new(id: i64, display_name: Option<String>) -> Self {
        Self { id, display_name }
    }
}

/// Provenance metadata persisted alongside the history.
///
/// `creator_*` is stamped at first creation (or explicit reset) and never
/// overwritten by later turns. `last_*` is refreshed on every save. The
/// `extra` map preserves unrecognized persisted fields across load/save
/// cycles for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    pub creator_id: Option<String>,
    pub creator_name: Option<String>,
    pub last_interactor_id: Option<String>,
    pub last_interactor_name: Option<String>,
    pub last_updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RecordMeta {
    /// True when no record existed in the store (nothing was ever persisted).
    pub fn is_empty(&self) -> bool {
        self.creator_id.is_none()
            && self.creator_name.is_none()
            && self.last_interactor_id.is_none()
            && self.last_interactor_name.is_none()
            && self.last_updated_at.is_none()
            && self.extra.is_empty()
    }

    /// Whether creator provenance is present.
    pub fn has_creator(&self) -> bool {
        self.creator_id.is_some() || self.creator_name.is_some()
    }
}

/// The full persisted per-chat document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub chat_id: ChatId,
    pub history: Vec<Turn>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}
