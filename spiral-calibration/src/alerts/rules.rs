use spiral_core::config::AlertConfig;
use spiral_core::models::{Alert, AlertCode, AlertSeverity, FacetCode, FacetScores};

const LOW_GROUNDING_RECOMMENDATION: &str = "Anchor the day with one small, repeatable \
    grounding ritual and revisit existing routines before adding new commitments.";

const AVOIDANCE_SPIKE_RECOMMENDATION: &str = "Name what is being avoided and shrink the next \
    step until it can be started today.";

/// Avoidance implied by a courage score: `100 − courage`.
pub fn avoidance(courage: u8) -> f64 {
    100.0 - f64::from(courage)
}

/// `low_grounding`: E2_Grounding strictly below the threshold.
pub fn low_grounding(current: &FacetScores, config: &AlertConfig) -> Option<Alert> {
    let grounding = current.get(&FacetCode::E2Grounding)?;
    if grounding.score >= config.low_grounding_threshold {
        return None;
    }
    Some(Alert {
        code: AlertCode::LowGrounding,
        severity: AlertSeverity::Warning,
        message: format!(
            "Grounding score {} is below {}",
            grounding.score, config.low_grounding_threshold
        ),
        recommendation: LOW_GROUNDING_RECOMMENDATION.to_string(),
        facets_affected: vec![FacetCode::E2Grounding],
    })
}

/// `avoidance_spike`: courage-derived avoidance grew by more than the ratio.
///
/// Uses F2_Courage only. `content_quality.avoidance_score` is a separate
/// content-level signal and does not feed this rule.
pub fn avoidance_spike(
    current: &FacetScores,
    previous: &FacetScores,
    config: &AlertConfig,
) -> Option<Alert> {
    let current_avoidance = avoidance(current.get(&FacetCode::F2Courage)?.score);
    let previous_avoidance = avoidance(previous.get(&FacetCode::F2Courage)?.score);
    if current_avoidance <= previous_avoidance * config.avoidance_spike_ratio {
        return None;
    }
    Some(Alert {
        code: AlertCode::AvoidanceSpike,
        severity: AlertSeverity::Action,
        message: format!(
            "Avoidance rose from {previous_avoidance:.0} to {current_avoidance:.0}"
        ),
        recommendation: AVOIDANCE_SPIKE_RECOMMENDATION.to_string(),
        facets_affected: vec![FacetCode::F2Courage],
    })
}
