//! Per-inbound-message turn handling.

pub mod locks;
pub mod orchestrator;
