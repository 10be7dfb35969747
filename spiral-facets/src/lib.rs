//! # spiral-facets
//!
//! Converts a feature bag into twelve facet scores.
//!
//! ## Pipeline
//! 1. **Normalize** continuous conversational counts against population
//!    statistics: `z = (x − mean) / stdev`, mapped from [−2, 2] onto [0, 1].
//! 2. **Score** each facet with a fixed linear formula over 2–3 inputs,
//!    `round(raw × 100)` clamped to [0, 100].
//! 3. **Confidence** is shared: `max(0.3, groups_with_signal / 3)`.
//!
//! Scorers are independent and can run in parallel.

pub mod confidence;
pub mod engine;
pub mod normalizer;
pub mod scorers;

pub use engine::FacetEngine;
pub use normalizer::FeatureNormalizer;
pub use scorers::{ScorerFn, FACET_SCORERS};
