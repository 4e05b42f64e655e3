//! Shared domain types for Parlance.
//!
//! This crate contains the core domain types used across the relay:
//! conversation turns, persisted records with provenance metadata,
//! completion request/response shapes, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod completion;
pub mod conversation;
pub mod error;
pub mod turn;
