//! Observability utilities for Parlance.

pub mod tracing_setup;
