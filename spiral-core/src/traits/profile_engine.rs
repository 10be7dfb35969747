use chrono::{DateTime, Utc};

use crate::errors::SpiralResult;
use crate::models::{
    Alert, ElementalProfile, ExplicitScore, FacetScore, FacetScores, FeatureBag, PhaseInference,
};

/// The engine's in-process surface: feature bag in, profile out.
///
/// Every method is a pure function of its arguments and the engine's
/// immutable configuration.
pub trait IProfileEngine: Send + Sync {
    /// Run all twelve facet scorers over a validated bag.
    fn score_facets(&self, features: &FeatureBag) -> SpiralResult<FacetScores>;

    /// Roll facet scores up into the five elements. Fails when any of the twelve facets is missing.
    fn calculate_elemental_profile(
        &self,
        facet_scores: &FacetScores,
    ) -> SpiralResult<ElementalProfile>;

    /// Classify the phase. Fails when any of the twelve facets is missing.
    fn infer_phase(&self, facet_scores: &FacetScores) -> SpiralResult<PhaseInference>;

    /// Merge an implicit score with an optional self-report. `now` defaults to the current time.
    fn blend_scores(
        &self,
        implicit: &FacetScore,
        explicit: Option<&ExplicitScore>,
        now: Option<DateTime<Utc>>,
    ) -> FacetScore;

    /// Evaluate the alert rules.
    fn detect_alerts(
        &self,
        facet_scores: &FacetScores,
        previous_scores: Option<&FacetScores>,
    ) -> Vec<Alert>;
}
