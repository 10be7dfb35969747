//! Aether facets: values and fulfillment.

use spiral_core::models::{FacetCode, FacetScore, FeatureBag, Metric};

use super::Formula;
use crate::normalizer::FeatureNormalizer;

/// AE1_Values: explicit values language and truthfulness.
pub fn values(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .normalized(Metric::ValuesHits, 0.6)
        .bounded(Metric::TruthNaming, 0.4)
        .finish(FacetCode::AE1Values)
}

/// AE2_Fulfillment: sense of wholeness backed by completed work.
pub fn fulfillment(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .bounded(Metric::WholenessReferences, 0.5)
        .bounded(Metric::TasksCompletionRate, 0.3)
        .normalized(Metric::MeaningDensity, 0.2)
        .finish(FacetCode::AE2Fulfillment)
}
