//! Integration facets: C1_Integration and C2_Integrity.

use spiral_core::models::{FacetCode, FacetScore, FeatureBag, Metric};

use super::Formula;
use crate::normalizer::FeatureNormalizer;

/// C1_Integration: committing to carry insight into practice.
pub fn integration(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .bounded(Metric::IntegrationCommitment, 0.5)
        .normalized(Metric::CoherenceMarkers, 0.3)
        .weekly(Metric::RitualsLast7Days, 0.2)
        .finish(FacetCode::C1Integration)
}

/// C2_Integrity: repairing ruptures and keeping commitments.
pub fn integrity(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .bounded(Metric::IntegrityRepair, 0.5)
        .bounded(Metric::OntimeRate, 0.3)
        .bounded(Metric::TruthNaming, 0.2)
        .finish(FacetCode::C2Integrity)
}
