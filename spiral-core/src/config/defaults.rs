//! Compiled defaults for every config section.

// Blending
pub const DEFAULT_EXPLICIT_WEIGHT: f64 = 0.65;
pub const DEFAULT_DECAY_HALF_LIFE_DAYS: f64 = 120.0;
pub const DEFAULT_CONFLICT_THRESHOLD: u8 = 25;

// Alerts
pub const DEFAULT_LOW_GROUNDING_THRESHOLD: u8 = 35;
pub const DEFAULT_AVOIDANCE_SPIKE_RATIO: f64 = 1.3;

// Population statistics (mean, stdev). Means sit two deviations above zero,
// so an absent signal normalizes to 0.
pub const MEANING_DENSITY_STAT: (f64, f64) = (0.4, 0.2);
pub const ACTION_COMMITMENT_COUNT_STAT: (f64, f64) = (3.0, 1.5);
pub const COHERENCE_MARKERS_STAT: (f64, f64) = (4.0, 2.0);
pub const ROUTINE_LANGUAGE_STAT: (f64, f64) = (2.0, 1.0);
pub const META_REFERENCES_STAT: (f64, f64) = (1.6, 0.8);
pub const VALUES_HITS_STAT: (f64, f64) = (3.0, 1.5);

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
