use serde::{Deserialize, Serialize};

use super::defaults;

/// Policy for merging self-reported scores with computed ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendingConfig {
    /// Trust given to a same-day self-report (0.0–1.0).
    pub explicit_weight: f64,
    /// Decay constant for that trust, in days.
    pub decay_half_life_days: f64,
    /// Disagreement (score points) above which the facet is flagged for calibration.
    pub conflict_threshold: u8,
}

impl Default for BlendingConfig {
    fn default() -> Self {
        Self {
            explicit_weight: defaults::DEFAULT_EXPLICIT_WEIGHT,
            decay_half_life_days: defaults::DEFAULT_DECAY_HALF_LIFE_DAYS,
            conflict_threshold: defaults::DEFAULT_CONFLICT_THRESHOLD,
        }
    }
}
