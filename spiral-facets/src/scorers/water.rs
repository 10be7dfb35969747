//! Water facets: attunement and belonging.

use spiral_core::models::{FacetCode, FacetScore, FeatureBag, Metric};

use super::Formula;
use crate::normalizer::FeatureNormalizer;

/// W1_Attunement: emotional regulation and reflective writing.
pub fn attunement(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .bounded(Metric::AffectRegulationOk, 0.6)
        .weekly(Metric::JournalsLast7Days, 0.4)
        .finish(FacetCode::W1Attunement)
}

/// W2_Belonging: give-and-take in relationships.
pub fn belonging(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .bounded(Metric::ReciprocityIndex, 0.6)
        .bounded(Metric::HelpSeekingAppropriate, 0.4)
        .finish(FacetCode::W2Belonging)
}
