use spiral_core::errors::{SpiralError, SpiralResult};
use spiral_core::models::{FacetCode, FacetScores};

/// Reject maps missing any facet, keyed inconsistently, or carrying
/// out-of-range values.
///
/// A missing facet is never defaulted to 0; that would bias every element
/// and logit it feeds.
pub fn require_complete(scores: &FacetScores) -> SpiralResult<()> {
    for code in FacetCode::ALL {
        let score = scores
            .get(&code)
            .ok_or(SpiralError::MissingInput { facet: code })?;
        if score.code != code {
            return Err(SpiralError::MismatchedFacet {
                key: code,
                found: score.code,
            });
        }
        score.validate()?;
    }
    Ok(())
}
