use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Metric;

/// Population mean and standard deviation for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationStat {
    pub mean: f64,
    pub stdev: f64,
}

impl PopulationStat {
    pub const fn new(mean: f64, stdev: f64) -> Self {
        Self { mean, stdev }
    }

    const fn from_pair(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

/// Population statistics for the continuous conversational metrics.
///
/// Placeholder values until real population data exists. Passed into the
/// normalizer at construction so tests can swap in fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    pub meaning_density: PopulationStat,
    pub action_commitment_count: PopulationStat,
    pub coherence_markers: PopulationStat,
    pub routine_language: PopulationStat,
    pub meta_references: PopulationStat,
    pub values_hits: PopulationStat,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            meaning_density: PopulationStat::from_pair(defaults::MEANING_DENSITY_STAT),
            action_commitment_count: PopulationStat::from_pair(
                defaults::ACTION_COMMITMENT_COUNT_STAT,
            ),
            coherence_markers: PopulationStat::from_pair(defaults::COHERENCE_MARKERS_STAT),
            routine_language: PopulationStat::from_pair(defaults::ROUTINE_LANGUAGE_STAT),
            meta_references: PopulationStat::from_pair(defaults::META_REFERENCES_STAT),
            values_hits: PopulationStat::from_pair(defaults::VALUES_HITS_STAT),
        }
    }
}

impl PopulationConfig {
    /// Statistics for a metric, or `None` when the metric passes through unnormalized.
    pub fn stat(&self, metric: Metric) -> Option<PopulationStat> {
        match metric {
            Metric::MeaningDensity => Some(self.meaning_density),
            Metric::ActionCommitmentCount => Some(self.action_commitment_count),
            Metric::CoherenceMarkers => Some(self.coherence_markers),
            Metric::RoutineLanguage => Some(self.routine_language),
            Metric::MetaReferences => Some(self.meta_references),
            Metric::ValuesHits => Some(self.values_hits),
            _ => None,
        }
    }

    /// Every configured entry, for validation and logging.
    pub fn entries(&self) -> [(Metric, PopulationStat); 6] {
        [
            (Metric::MeaningDensity, self.meaning_density),
            (Metric::ActionCommitmentCount, self.action_commitment_count),
            (Metric::CoherenceMarkers, self.coherence_markers),
            (Metric::RoutineLanguage, self.routine_language),
            (Metric::MetaReferences, self.meta_references),
            (Metric::ValuesHits, self.values_hits),
        ]
    }
}
