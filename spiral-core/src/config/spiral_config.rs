//! Top-level engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AlertConfig, BlendingConfig, ObservabilityConfig, PopulationConfig};
use crate::errors::ConfigError;

/// Environment variable that overrides `observability.log_level`.
pub const LOG_LEVEL_ENV: &str = "SPIRAL_LOG_LEVEL";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SPIRAL_*`, applied by `from_file`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralConfig {
    pub blending: BlendingConfig,
    pub population: PopulationConfig,
    pub alerts: AlertConfig,
    pub observability: ObservabilityConfig,
}

impl SpiralConfig {
    /// Load configuration from a TOML string and validate it.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: SpiralConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file, apply environment overrides, then validate.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: SpiralConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.observability.log_level = level;
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let blending = &self.blending;
        if !(0.0..=1.0).contains(&blending.explicit_weight) {
            return Err(invalid(
                "blending.explicit_weight",
                "must be between 0.0 and 1.0",
            ));
        }
        if !(blending.decay_half_life_days.is_finite() && blending.decay_half_life_days > 0.0) {
            return Err(invalid(
                "blending.decay_half_life_days",
                "must be a positive number of days",
            ));
        }
        if blending.conflict_threshold > 100 {
            return Err(invalid(
                "blending.conflict_threshold",
                "must be between 0 and 100",
            ));
        }

        for (metric, stat) in self.population.entries() {
            if !stat.mean.is_finite() {
                return Err(invalid(
                    &format!("population.{metric}.mean"),
                    "must be finite",
                ));
            }
            if !(stat.stdev.is_finite() && stat.stdev > 0.0) {
                return Err(invalid(
                    &format!("population.{metric}.stdev"),
                    "must be greater than 0",
                ));
            }
        }

        if self.alerts.low_grounding_threshold > 100 {
            return Err(invalid(
                "alerts.low_grounding_threshold",
                "must be between 0 and 100",
            ));
        }
        if !(self.alerts.avoidance_spike_ratio.is_finite() && self.alerts.avoidance_spike_ratio >= 1.0)
        {
            return Err(invalid(
                "alerts.avoidance_spike_ratio",
                "must be at least 1.0",
            ));
        }

        if self.observability.log_level.trim().is_empty() {
            return Err(invalid("observability.log_level", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
