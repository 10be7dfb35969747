//! Phase inference: fixed logits → softmax(T = 12) → ranked phases.

pub mod coefficients;
pub mod inferencer;
pub mod softmax;

pub use coefficients::PHASE_COEFFICIENTS;
pub use inferencer::{infer, logits};
pub use softmax::softmax;
