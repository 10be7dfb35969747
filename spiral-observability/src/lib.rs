//! # spiral-observability
//!
//! Subscriber setup driven by `[observability]` config, span macros for each
//! pipeline stage, and structured events for the decisions worth auditing
//! (calibration conflicts, raised alerts, inferred phases).

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter, spans};
