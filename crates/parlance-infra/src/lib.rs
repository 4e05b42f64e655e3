//! Infrastructure implementations for Parlance.
//!
//! Concrete adapters behind the parlance-core traits: the SQLite
//! conversation store, the OpenRouter completion provider, the secret
//! resolution chain, and the Telegram Bot API client with its lazy
//! initialization cell.

pub mod config;
pub mod llm;
pub mod secret;
pub mod sqlite;
pub mod telegram;
