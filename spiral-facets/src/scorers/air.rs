//! Air facets: reflection and adaptability.

use spiral_core::models::{FacetCode, FacetScore, FeatureBag, Metric};

use super::Formula;
use crate::normalizer::FeatureNormalizer;

/// A1_Reflection: thinking about one's own thinking.
pub fn reflection(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .normalized(Metric::MetaReferences, 0.5)
        .weekly(Metric::JournalsLast7Days, 0.3)
        .bounded(Metric::ReadabilityVariance, 0.2)
        .finish(FacetCode::A1Reflection)
}

/// A2_Adaptability: range of expression, penalized by avoidance.
///
/// The only formula with a negative weight; floored at 0 before scaling.
pub fn adaptability(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .bounded(Metric::SentimentVariance, 0.5)
        .bounded(Metric::ReadabilityVariance, 0.5)
        .bounded(Metric::AvoidanceScore, -0.4)
        .floor_at_zero()
        .finish(FacetCode::A2Adaptability)
}
