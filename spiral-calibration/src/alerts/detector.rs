use spiral_core::config::AlertConfig;
use spiral_core::models::{Alert, FacetScores};
use tracing::debug;

use super::rules;

/// Evaluate every rule. Trend rules run only when previous scores are given.
pub fn detect_alerts(
    current: &FacetScores,
    previous: Option<&FacetScores>,
    config: &AlertConfig,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    alerts.extend(rules::low_grounding(current, config));

    if let Some(previous) = previous {
        alerts.extend(rules::avoidance_spike(current, previous, config));
    }

    debug!(
        alerts = alerts.len(),
        with_history = previous.is_some(),
        "alert rules evaluated"
    );
    alerts
}
