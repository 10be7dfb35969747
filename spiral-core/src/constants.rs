/// Highest facet score.
pub const SCORE_MAX: u8 = 100;

/// Confidence floor shared by every facet scorer.
pub const MIN_CONFIDENCE: f64 = 0.3;

/// Confidence ceiling.
pub const MAX_CONFIDENCE: f64 = 1.0;

/// Number of feature groups in a bag (conversational, behavioral, content quality).
pub const FEATURE_GROUP_COUNT: usize = 3;

/// Softmax temperature for phase inference.
///
/// Facet scores are 0–100 and logit coefficients are O(1), so logit spreads
/// run to tens of points. T = 12 keeps the distribution from collapsing to
/// one-hot at those spreads.
pub const PHASE_TEMPERATURE: f64 = 12.0;

/// Tolerance for probability-sum checks.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Window for weekly counts (rituals, journals).
pub const WEEK_DAYS: f64 = 7.0;

/// Streak length treated as fully established.
pub const STREAK_SATURATION_DAYS: f64 = 30.0;
