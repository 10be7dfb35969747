//! Span definitions per pipeline stage: scoring, elemental, phase, blending, alerts.

/// Create a facet scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($parallel:expr) => {
        tracing::info_span!("spiral.scoring", parallel = $parallel)
    };
}

/// Create an elemental aggregation span.
#[macro_export]
macro_rules! elemental_span {
    ($facet_count:expr) => {
        tracing::info_span!("spiral.elemental", facet_count = $facet_count)
    };
}

/// Create a phase inference span.
#[macro_export]
macro_rules! phase_span {
    ($temperature:expr) => {
        tracing::info_span!("spiral.phase", temperature = $temperature)
    };
}

/// Create a blending span.
#[macro_export]
macro_rules! blending_span {
    ($facet:expr) => {
        tracing::info_span!("spiral.blending", facet = %$facet)
    };
}

/// Create an alert detection span.
#[macro_export]
macro_rules! alerts_span {
    ($with_history:expr) => {
        tracing::info_span!("spiral.alerts", with_history = $with_history)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "spiral.scoring";
    pub const ELEMENTAL: &str = "spiral.elemental";
    pub const PHASE: &str = "spiral.phase";
    pub const BLENDING: &str = "spiral.blending";
    pub const ALERTS: &str = "spiral.alerts";
}
