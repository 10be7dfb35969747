use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spiral_core::models::{
    Alert, ElementalProfile, ExplicitScore, FacetCode, FacetScores, FeatureBag, PhaseInference,
};
use ts_rs::TS;

/// Everything one assessment needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct AssessmentRequest {
    pub features: FeatureBag,
    /// Self-reports keyed by facet. Facets without one keep their implicit score.
    pub explicit_scores: BTreeMap<FacetCode, ExplicitScore>,
    /// Scores from the previous assessment, enabling trend alerts.
    pub previous_scores: Option<FacetScores>,
    /// Reference time for decay. Defaults to the current time.
    pub now: Option<DateTime<Utc>>,
}

impl AssessmentRequest {
    pub fn new(features: FeatureBag) -> Self {
        Self {
            features,
            ..Self::default()
        }
    }

    pub fn with_explicit(mut self, code: FacetCode, explicit: ExplicitScore) -> Self {
        self.explicit_scores.insert(code, explicit);
        self
    }

    pub fn with_previous(mut self, previous: FacetScores) -> Self {
        self.previous_scores = Some(previous);
        self
    }

    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }
}

/// Output of [`crate::ProfileEngine::assess`], with every intermediate stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileAssessment {
    /// Scores computed from the feature bag alone.
    pub implicit_scores: FacetScores,
    /// Scores after blending with self-reports. Identical to the implicit
    /// score for facets without one.
    pub final_scores: FacetScores,
    pub elemental: ElementalProfile,
    pub phase: PhaseInference,
    pub alerts: Vec<Alert>,
    /// Facets whose self-report disagreed with the computed score.
    pub calibration_needed: Vec<FacetCode>,
}
