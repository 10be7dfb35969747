//! # spiral-calibration
//!
//! Everything that adjusts or reacts to finished facet scores.
//!
//! - **Blending**: merges a computed score with a self-report whose weight
//!   decays as `explicit_weight × e^(−days / half_life)`, and flags large
//!   disagreements for human calibration.
//! - **Alerts**: independent threshold and trend rules over the current
//!   (and optionally previous) facet scores.

pub mod alerts;
pub mod blending;

pub use alerts::detect_alerts;
pub use blending::{blend_breakdown, blend_scores, BlendBreakdown};
