use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the alert rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// `low_grounding` fires when E2_Grounding is strictly below this.
    pub low_grounding_threshold: u8,
    /// `avoidance_spike` fires when avoidance grows by more than this factor.
    pub avoidance_spike_ratio: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            low_grounding_threshold: defaults::DEFAULT_LOW_GROUNDING_THRESHOLD,
            avoidance_spike_ratio: defaults::DEFAULT_AVOIDANCE_SPIKE_RATIO,
        }
    }
}
