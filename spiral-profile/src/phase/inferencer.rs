use std::collections::BTreeMap;

use spiral_core::constants::PHASE_TEMPERATURE;
use spiral_core::errors::{SpiralError, SpiralResult};
use spiral_core::models::{FacetScores, Phase, PhaseInference};
use tracing::debug;

use super::coefficients::PHASE_COEFFICIENTS;
use super::softmax::softmax;
use crate::completeness::require_complete;

/// One logit per phase.
pub fn logits(scores: &FacetScores) -> SpiralResult<BTreeMap<Phase, f64>> {
    require_complete(scores)?;
    let mut logits = BTreeMap::new();
    for (phase, terms) in PHASE_COEFFICIENTS.iter() {
        let mut logit = 0.0;
        for (code, coefficient) in terms.iter() {
            let score = scores
                .get(code)
                .ok_or(SpiralError::MissingInput { facet: *code })?;
            logit += coefficient * f64::from(score.score);
        }
        logits.insert(*phase, logit);
    }
    Ok(logits)
}

/// Classify the phase from a complete facet-score set.
pub fn infer(scores: &FacetScores) -> SpiralResult<PhaseInference> {
    let logits = logits(scores)?;

    let phases: Vec<Phase> = logits.keys().copied().collect();
    let values: Vec<f64> = logits.values().copied().collect();
    let probabilities: BTreeMap<Phase, f64> = phases
        .iter()
        .copied()
        .zip(softmax(&values, PHASE_TEMPERATURE))
        .collect();

    // Stable sort: ties keep declaration order.
    let mut ranked: Vec<(Phase, f64)> = probabilities.iter().map(|(p, v)| (*p, *v)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    let (primary, primary_confidence) = ranked[0];
    let (secondary, secondary_confidence) = ranked[1];

    debug!(
        %primary,
        primary_confidence,
        %secondary,
        secondary_confidence,
        "phase inferred"
    );

    Ok(PhaseInference {
        primary,
        primary_confidence,
        secondary,
        secondary_confidence,
        logits,
        probabilities,
    })
}
