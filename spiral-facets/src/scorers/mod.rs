//! The twelve facet scorers.
//!
//! Each scorer is a plain function over the bag. The registry below is the
//! only place facets are enumerated; there is no dynamic dispatch.

pub mod aether;
pub mod air;
pub mod earth;
pub mod fire;
pub mod integration;
pub mod water;

use std::collections::BTreeMap;

use spiral_core::constants::{SCORE_MAX, STREAK_SATURATION_DAYS, WEEK_DAYS};
use spiral_core::models::{FacetCode, FacetScore, FeatureBag, Metric};
use tracing::warn;

use crate::confidence;
use crate::normalizer::FeatureNormalizer;

/// Signature shared by every facet scorer.
pub type ScorerFn = fn(&FeatureBag, &FeatureNormalizer) -> FacetScore;

/// Fixed facet → scorer registry, in facet declaration order.
pub static FACET_SCORERS: [(FacetCode, ScorerFn); 12] = [
    (FacetCode::F1Meaning, fire::meaning),
    (FacetCode::F2Courage, fire::courage),
    (FacetCode::E1Coherence, earth::coherence),
    (FacetCode::E2Grounding, earth::grounding),
    (FacetCode::W1Attunement, water::attunement),
    (FacetCode::W2Belonging, water::belonging),
    (FacetCode::A1Reflection, air::reflection),
    (FacetCode::A2Adaptability, air::adaptability),
    (FacetCode::AE1Values, aether::values),
    (FacetCode::AE2Fulfillment, aether::fulfillment),
    (FacetCode::C1Integration, integration::integration),
    (FacetCode::C2Integrity, integration::integrity),
];

/// Look up the scorer for one facet.
pub fn scorer_for(code: FacetCode) -> ScorerFn {
    match code {
        FacetCode::F1Meaning => fire::meaning,
        FacetCode::F2Courage => fire::courage,
        FacetCode::E1Coherence => earth::coherence,
        FacetCode::E2Grounding => earth::grounding,
        FacetCode::W1Attunement => water::attunement,
        FacetCode::W2Belonging => water::belonging,
        FacetCode::A1Reflection => air::reflection,
        FacetCode::A2Adaptability => air::adaptability,
        FacetCode::AE1Values => aether::values,
        FacetCode::AE2Fulfillment => aether::fulfillment,
        FacetCode::C1Integration => integration::integration,
        FacetCode::C2Integrity => integration::integrity,
    }
}

/// Accumulates `Σ input × weight` and records each weight for audit.
pub(crate) struct Formula<'a> {
    bag: &'a FeatureBag,
    normalizer: &'a FeatureNormalizer,
    raw: f64,
    weights: BTreeMap<String, f64>,
}

impl<'a> Formula<'a> {
    pub(crate) fn new(bag: &'a FeatureBag, normalizer: &'a FeatureNormalizer) -> Self {
        Self {
            bag,
            normalizer,
            raw: 0.0,
            weights: BTreeMap::new(),
        }
    }

    fn term(mut self, metric: Metric, input: f64, weight: f64) -> Self {
        self.raw += input * weight;
        self.weights.insert(metric.name().to_string(), weight);
        self
    }

    /// Population-normalized input.
    pub(crate) fn normalized(self, metric: Metric, weight: f64) -> Self {
        let input = self.normalizer.feature(self.bag, metric);
        self.term(metric, input, weight)
    }

    /// Pass-through input clamped to [0, 1]. Flags arrive as 0/1.
    pub(crate) fn bounded(self, metric: Metric, weight: f64) -> Self {
        let input = self.bag.metric(metric).clamp(0.0, 1.0);
        self.term(metric, input, weight)
    }

    /// Weekly count, saturating at seven.
    pub(crate) fn weekly(self, metric: Metric, weight: f64) -> Self {
        let input = (self.bag.metric(metric) / WEEK_DAYS).clamp(0.0, 1.0);
        self.term(metric, input, weight)
    }

    /// Streak length, saturating at thirty days.
    pub(crate) fn streak(self, metric: Metric, weight: f64) -> Self {
        let input = (self.bag.metric(metric) / STREAK_SATURATION_DAYS).clamp(0.0, 1.0);
        self.term(metric, input, weight)
    }

    /// Floor the running sum at zero.
    pub(crate) fn floor_at_zero(mut self) -> Self {
        self.raw = self.raw.max(0.0);
        self
    }

    /// Scale to 0–100, clamp, and attach the shared confidence.
    pub(crate) fn finish(self, code: FacetCode) -> FacetScore {
        let scaled = (self.raw * 100.0).round();
        let max = f64::from(SCORE_MAX);
        if !(0.0..=max).contains(&scaled) {
            warn!(facet = %code, raw = self.raw, "facet score out of range, clamping");
        }
        let score = if scaled.is_nan() {
            0
        } else {
            scaled.clamp(0.0, max) as u8
        };
        FacetScore::implicit(code, score, confidence::calculate(self.bag), self.weights)
    }
}
