//! Structured log events for pipeline decisions.

use spiral_core::models::{Alert, Element, FacetCode, Phase};

/// Log a completed assessment.
pub fn assessment_completed(primary: Phase, secondary: Phase, dominant: Element, alerts: usize) {
    tracing::info!(
        event = "assessment_completed",
        primary = primary.as_str(),
        secondary = secondary.as_str(),
        dominant_element = dominant.as_str(),
        alerts = alerts,
        "assessment completed"
    );
}

/// Log a self-report that disagrees with the computed score.
pub fn calibration_flagged(facet: FacetCode, explicit: u8, implicit: u8) {
    tracing::warn!(
        event = "calibration_flagged",
        facet = %facet,
        explicit = explicit,
        implicit = implicit,
        "self-report flagged for calibration"
    );
}

/// Log a raised alert.
pub fn alert_raised(alert: &Alert) {
    tracing::warn!(
        event = "alert_raised",
        code = %alert.code,
        facets = ?alert.facets_affected,
        "{}",
        alert.message
    );
}

/// Log a batch scoring run.
pub fn batch_scored(total: usize, failed: usize) {
    tracing::info!(
        event = "batch_scored",
        total = total,
        failed = failed,
        "batch scoring completed"
    );
}
