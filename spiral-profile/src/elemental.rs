use spiral_core::errors::SpiralResult;
use spiral_core::models::{Element, ElementalProfile, FacetScores};

use crate::completeness::require_complete;

/// Roll a complete facet-score set up into the five elements.
///
/// Each element is the arithmetic mean of its member facets, grouped by map
/// key through the static facet → element table. Profile confidence is the
/// mean of all twelve facet confidences. Fails with `MissingInput` when any
/// facet is absent.
pub fn aggregate(scores: &FacetScores) -> SpiralResult<ElementalProfile> {
    require_complete(scores)?;

    let mut values = [0.0; 5];
    for (slot, element) in values.iter_mut().zip(Element::ALL) {
        let members: Vec<f64> = scores
            .iter()
            .filter(|(code, _)| code.element() == element)
            .map(|(_, s)| f64::from(s.score))
            .collect();
        *slot = mean(&members);
    }

    let confidences: Vec<f64> = scores.values().map(|s| s.confidence).collect();
    Ok(ElementalProfile::from_values(values, mean(&confidences)))
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
