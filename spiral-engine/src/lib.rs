//! # spiral-engine
//!
//! The in-process entry point. [`ProfileEngine`] owns the immutable
//! configuration, implements [`spiral_core::traits::IProfileEngine`] by
//! delegating to the stage crates, and adds a full-pipeline
//! [`ProfileEngine::assess`].

pub mod assessment;
pub mod engine;

pub use assessment::{AssessmentRequest, ProfileAssessment};
pub use engine::ProfileEngine;
