use chrono::{DateTime, Utc};
use spiral_core::config::BlendingConfig;
use spiral_core::constants::SCORE_MAX;
use spiral_core::models::{ExplicitScore, FacetScore, ScoreSource};
use tracing::warn;

/// Evidence-weight keys added by blending.
pub const EXPLICIT_KEY: &str = "explicit";
pub const IMPLICIT_KEY: &str = "implicit";
pub const CALIBRATION_KEY: &str = "calibration_needed";

/// Every intermediate value of one blend, for audit logging.
#[derive(Debug, Clone, PartialEq)]
pub struct BlendBreakdown {
    /// Whole days between the self-report and `now`, floored, never negative.
    pub days_since_explicit: i64,
    /// Weight given to the self-report after decay.
    pub decayed_weight: f64,
    /// Weighted mix before rounding.
    pub raw_blended: f64,
    /// Self-report and computed score disagree by more than the threshold.
    pub calibration_needed: bool,
}

/// `explicit_weight × e^(−days / half_life)`.
///
/// A same-day report keeps the full explicit weight; older reports approach 0.
pub fn decayed_weight(days_since_explicit: i64, config: &BlendingConfig) -> f64 {
    let days = days_since_explicit.max(0) as f64;
    config.explicit_weight * (-days / config.decay_half_life_days).exp()
}

/// Compute the blend without building a new score.
pub fn blend_breakdown(
    implicit: &FacetScore,
    explicit: &ExplicitScore,
    now: DateTime<Utc>,
    config: &BlendingConfig,
) -> BlendBreakdown {
    // A report stamped in the future counts as same-day.
    let days_since_explicit = (now - explicit.taken_at).num_days().max(0);
    let weight = decayed_weight(days_since_explicit, config);

    let explicit_value = f64::from(explicit.score);
    let implicit_value = f64::from(implicit.score);
    let raw_blended = weight * explicit_value + (1.0 - weight) * implicit_value;
    let calibration_needed =
        explicit.score.abs_diff(implicit.score) > config.conflict_threshold;

    BlendBreakdown {
        days_since_explicit,
        decayed_weight: weight,
        raw_blended,
        calibration_needed,
    }
}

/// Merge an implicit score with an optional self-report.
///
/// Without a self-report the implicit score comes back unchanged. Otherwise
/// the result is a copy with the blended score, `source = blended`, and the
/// original evidence weights extended by `explicit`, `implicit` and
/// `calibration_needed` (0/1).
pub fn blend_scores(
    implicit: &FacetScore,
    explicit: Option<&ExplicitScore>,
    now: DateTime<Utc>,
    config: &BlendingConfig,
) -> FacetScore {
    let Some(explicit) = explicit else {
        return implicit.clone();
    };

    let breakdown = blend_breakdown(implicit, explicit, now, config);
    if breakdown.calibration_needed {
        warn!(
            facet = %implicit.code,
            explicit = explicit.score,
            implicit = implicit.score,
            threshold = config.conflict_threshold,
            "self-report disagrees with computed score, calibration needed"
        );
    }

    let mut blended = implicit.clone();
    blended.score = breakdown
        .raw_blended
        .round()
        .clamp(0.0, f64::from(SCORE_MAX)) as u8;
    blended.source = ScoreSource::Blended;
    blended
        .evidence_weights
        .insert(EXPLICIT_KEY.to_string(), breakdown.decayed_weight);
    blended
        .evidence_weights
        .insert(IMPLICIT_KEY.to_string(), 1.0 - breakdown.decayed_weight);
    blended.evidence_weights.insert(
        CALIBRATION_KEY.to_string(),
        if breakdown.calibration_needed { 1.0 } else { 0.0 },
    );
    blended
}

/// Whether a blended score was flagged for calibration.
pub fn needs_calibration(score: &FacetScore) -> bool {
    score
        .evidence_weights
        .get(CALIBRATION_KEY)
        .is_some_and(|flag| *flag > 0.0)
}
