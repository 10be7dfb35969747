//! Error handling for the profile engine.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod spiral_error;

pub use config_error::ConfigError;
pub use spiral_error::{SpiralError, SpiralResult};
