//! Completion provider abstraction and the fallback service over it.

pub mod provider;
pub mod service;
