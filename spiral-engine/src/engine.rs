use std::path::Path;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use spiral_calibration::blending::{self, BlendBreakdown};
use spiral_core::config::SpiralConfig;
use spiral_core::constants::PHASE_TEMPERATURE;
use spiral_core::errors::SpiralResult;
use spiral_core::models::{
    Alert, ElementalProfile, ExplicitScore, FacetScore, FacetScores, FeatureBag, PhaseInference,
};
use spiral_core::traits::IProfileEngine;
use spiral_facets::FacetEngine;
use spiral_observability::{
    alerts_span, blending_span, elemental_span, events, phase_span, scoring_span,
};
use tracing::debug;

use crate::assessment::{AssessmentRequest, ProfileAssessment};

/// Scoring engine bound to one immutable configuration.
#[derive(Debug, Clone, Default)]
pub struct ProfileEngine {
    facets: FacetEngine,
    config: SpiralConfig,
}

impl ProfileEngine {
    /// Validate the config and build an engine bound to it.
    pub fn new(config: SpiralConfig) -> SpiralResult<Self> {
        config.validate()?;
        Ok(Self {
            facets: FacetEngine::new(config.population.clone()),
            config,
        })
    }

    /// Load, override from the environment, validate, then build.
    pub fn from_file(path: &Path) -> SpiralResult<Self> {
        let config = SpiralConfig::from_file(path)?;
        Self::new(config)
    }

    pub fn config(&self) -> &SpiralConfig {
        &self.config
    }

    /// Score all twelve facets across the rayon pool.
    pub fn score_facets_parallel(&self, features: &FeatureBag) -> SpiralResult<FacetScores> {
        let _span = scoring_span!(true).entered();
        self.facets.score_facets_parallel(features)
    }

    /// Every intermediate value of one blend.
    pub fn blend_breakdown(
        &self,
        implicit: &FacetScore,
        explicit: &ExplicitScore,
        now: DateTime<Utc>,
    ) -> BlendBreakdown {
        blending::blend_breakdown(implicit, explicit, now, &self.config.blending)
    }

    /// Run the full pipeline: score, blend, aggregate, infer, alert.
    pub fn assess(&self, request: &AssessmentRequest) -> SpiralResult<ProfileAssessment> {
        let implicit_scores = self.score_facets(&request.features)?;
        let now = request.now.unwrap_or_else(Utc::now);

        let mut final_scores = FacetScores::new();
        let mut calibration_needed = Vec::new();
        for (code, implicit) in &implicit_scores {
            let explicit = request.explicit_scores.get(code);
            let blended = self.blend_scores(implicit, explicit, Some(now));
            if let Some(explicit) = explicit {
                if blending::needs_calibration(&blended) {
                    events::calibration_flagged(*code, explicit.score, implicit.score);
                    calibration_needed.push(*code);
                }
            }
            final_scores.insert(*code, blended);
        }

        let elemental = self.calculate_elemental_profile(&final_scores)?;
        let phase = self.infer_phase(&final_scores)?;
        let alerts = self.detect_alerts(&final_scores, request.previous_scores.as_ref());
        for alert in &alerts {
            events::alert_raised(alert);
        }

        events::assessment_completed(
            phase.primary,
            phase.secondary,
            elemental.dominant(),
            alerts.len(),
        );

        Ok(ProfileAssessment {
            implicit_scores,
            final_scores,
            elemental,
            phase,
            alerts,
            calibration_needed,
        })
    }

    /// Assess many requests in parallel. Results keep input order; one
    /// failing request does not affect the others.
    pub fn assess_batch(
        &self,
        requests: &[AssessmentRequest],
    ) -> Vec<SpiralResult<ProfileAssessment>> {
        let results: Vec<SpiralResult<ProfileAssessment>> =
            requests.par_iter().map(|request| self.assess(request)).collect();
        let failed = results.iter().filter(|r| r.is_err()).count();
        events::batch_scored(results.len(), failed);
        results
    }
}

impl IProfileEngine for ProfileEngine {
    fn score_facets(&self, features: &FeatureBag) -> SpiralResult<FacetScores> {
        let _span = scoring_span!(false).entered();
        self.facets.score_facets(features)
    }

    fn calculate_elemental_profile(
        &self,
        facet_scores: &FacetScores,
    ) -> SpiralResult<ElementalProfile> {
        let _span = elemental_span!(facet_scores.len()).entered();
        spiral_profile::aggregate(facet_scores)
    }

    fn infer_phase(&self, facet_scores: &FacetScores) -> SpiralResult<PhaseInference> {
        let _span = phase_span!(PHASE_TEMPERATURE).entered();
        spiral_profile::infer(facet_scores)
    }

    fn blend_scores(
        &self,
        implicit: &FacetScore,
        explicit: Option<&ExplicitScore>,
        now: Option<DateTime<Utc>>,
    ) -> FacetScore {
        let _span = blending_span!(implicit.code).entered();
        let now = now.unwrap_or_else(Utc::now);
        blending::blend_scores(implicit, explicit, now, &self.config.blending)
    }

    fn detect_alerts(
        &self,
        facet_scores: &FacetScores,
        previous_scores: Option<&FacetScores>,
    ) -> Vec<Alert> {
        let _span = alerts_span!(previous_scores.is_some()).entered();
        let alerts = spiral_calibration::detect_alerts(
            facet_scores,
            previous_scores,
            &self.config.alerts,
        );
        debug!(alerts = alerts.len(), "alerts detected");
        alerts
    }
}
