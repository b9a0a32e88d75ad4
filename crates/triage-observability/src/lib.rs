//! # triage-observability
//!
//! Structured tracing: subscriber initialisation, span definitions per
//! operation, and structured events for degradations and stage outcomes.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, events, init_tracing, spans::names};
