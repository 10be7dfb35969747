//! Configuration system for the profile engine.
//! TOML-based; every section falls back to compiled defaults.

pub mod alert_config;
pub mod blending_config;
pub mod defaults;
pub mod observability_config;
pub mod population_config;
pub mod spiral_config;

pub use alert_config::AlertConfig;
pub use blending_config::BlendingConfig;
pub use observability_config::ObservabilityConfig;
pub use population_config::{PopulationConfig, PopulationStat};
pub use spiral_config::{SpiralConfig, LOG_LEVEL_ENV};
