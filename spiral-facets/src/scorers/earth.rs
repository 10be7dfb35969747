//! Earth facets: coherence and grounding.

use spiral_core::models::{FacetCode, FacetScore, FeatureBag, Metric};

use super::Formula;
use crate::normalizer::FeatureNormalizer;

/// E1_Coherence: structured language backed by follow-through.
pub fn coherence(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .normalized(Metric::CoherenceMarkers, 0.5)
        .bounded(Metric::TasksCompletionRate, 0.3)
        .bounded(Metric::OntimeRate, 0.2)
        .finish(FacetCode::E1Coherence)
}

/// E2_Grounding: routines, streaks, and rituals.
pub fn grounding(bag: &FeatureBag, normalizer: &FeatureNormalizer) -> FacetScore {
    Formula::new(bag, normalizer)
        .normalized(Metric::RoutineLanguage, 0.3)
        .streak(Metric::StreakDays, 0.4)
        .weekly(Metric::RitualsLast7Days, 0.3)
        .finish(FacetCode::E2Grounding)
}
