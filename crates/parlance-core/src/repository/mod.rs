//! Repository trait definitions (ports).
//!
//! These traits define the storage and secret interfaces that the
//! infrastructure layer (parlance-infra) implements. The core crate never
//! depends on any specific storage technology.

pub mod conversation;
pub mod secret;
