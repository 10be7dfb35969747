use spiral_core::config::PopulationConfig;
use spiral_core::models::{FeatureBag, Metric};

/// Width of the z-score window mapped onto [0, 1].
const Z_WINDOW: f64 = 2.0;

/// Maps raw metric values onto comparable [0, 1] magnitudes.
#[derive(Debug, Clone, Default)]
pub struct FeatureNormalizer {
    population: PopulationConfig,
}

impl FeatureNormalizer {
    pub fn new(population: PopulationConfig) -> Self {
        Self { population }
    }

    pub fn population(&self) -> &PopulationConfig {
        &self.population
    }

    /// Normalize one value.
    ///
    /// Metrics with population statistics go through `((z + 2) / 4)` clamped
    /// to [0, 1]. Metrics without them pass through unchanged.
    pub fn normalize(&self, metric: Metric, value: f64) -> f64 {
        match self.population.stat(metric) {
            Some(stat) => {
                let z = if stat.stdev > 0.0 {
                    (value - stat.mean) / stat.stdev
                } else {
                    0.0
                };
                z_to_unit(z)
            }
            None => value,
        }
    }

    /// Read a metric from the bag and normalize it.
    pub fn feature(&self, bag: &FeatureBag, metric: Metric) -> f64 {
        self.normalize(metric, bag.metric(metric))
    }
}

/// Map z ∈ [−2, 2] onto [0, 1], clamping outside the window.
pub fn z_to_unit(z: f64) -> f64 {
    ((z + Z_WINDOW) / (2.0 * Z_WINDOW)).clamp(0.0, 1.0)
}
