//! Turn orchestration logic and repository trait definitions for Parlance.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements, plus the pure and concurrent pieces of
//! the conversation-turn pipeline: context windowing, completion fallback,
//! liveness signaling, and the orchestrator itself. It depends only on
//! `parlance-types` -- never on `parlance-infra` or any IO crate.

pub mod history;
pub mod llm;
pub mod repository;
pub mod service;
pub mod signal;
pub mod turn;
pub mod window;
