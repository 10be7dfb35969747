//! # spiral-core
//!
//! Foundation crate for the Spiralogic profile engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SpiralConfig;
pub use errors::{SpiralError, SpiralResult};
pub use models::{
    Alert, AlertCode, AlertSeverity, Element, ElementalProfile, ExplicitScore, FacetCode,
    FacetScore, FacetScores, FeatureBag, Phase, PhaseInference, ScoreSource,
};
