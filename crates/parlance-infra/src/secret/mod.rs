//! Secret provider implementations.
//!
//! - `file`: Secrets file provider (`secrets.toml` in the data directory, highest priority)
//! - `env`: Environment variable provider (fallback)
//! - `chain`: Secret chain builder wiring the providers together

pub mod chain;
pub mod env;
pub mod file;
