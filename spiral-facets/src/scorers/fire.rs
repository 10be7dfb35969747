//! Fire facets: meaning and courage.

use spiral_core::models::{FacetCode, FacetScore, FeatureBag, Metric};

use super::Formula;
use crate::normalizer::FeatureNormalizer;

/// F1_Meaning: how much the user's language carries purpose.
pub fn meaning(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .normalized(Metric::MeaningDensity, 0.5)
        .normalized(Metric::ValuesHits, 0.3)
        .bounded(Metric::WholenessReferences, 0.2)
        .finish(FacetCode::F1Meaning)
}

/// F2_Courage: naming hard truths and committing to action.
pub fn courage(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .bounded(Metric::TruthNaming, 0.4)
        .normalized(Metric::ActionCommitmentCount, 0.4)
        .bounded(Metric::HelpSeekingAppropriate, 0.2)
        .finish(FacetCode::F2Courage)
}
