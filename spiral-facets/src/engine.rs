//! FacetEngine: validates a bag and runs the scorer registry over it.

use rayon::prelude::*;
use spiral_core::config::PopulationConfig;
use spiral_core::errors::SpiralResult;
use spiral_core::models::{FacetCode, FacetScore, FacetScores, FeatureBag};
use tracing::debug;

use crate::normalizer::FeatureNormalizer;
use crate::scorers::{self, FACET_SCORERS};

/// Scores feature bags against a fixed population table.
#[derive(Debug, Clone, Default)]
pub struct FacetEngine {
    normalizer: FeatureNormalizer,
}

impl FacetEngine {
    pub fn new(population: PopulationConfig) -> Self {
        Self {
            normalizer: FeatureNormalizer::new(population),
        }
    }

    pub fn normalizer(&self) -> &FeatureNormalizer {
        &self.normalizer
    }

    /// Score all twelve facets sequentially.
    pub fn score_facets(&self, bag: &FeatureBag) -> SpiralResult<FacetScores> {
        bag.validate()?;
        let scores: FacetScores = FACET_SCORERS
            .iter()
            .map(|(code, scorer)| (*code, scorer(bag, &self.normalizer)))
            .collect();
        debug!(facets = scores.len(), "facet scoring complete");
        Ok(scores)
    }

    /// Score all twelve facets across the rayon pool, joining before return.
    pub fn score_facets_parallel(&self, bag: &FeatureBag) -> SpiralResult<FacetScores> {
        bag.validate()?;
        let scores: FacetScores = FACET_SCORERS
            .par_iter()
            .map(|(code, scorer)| (*code, scorer(bag, &self.normalizer)))
            .collect();
        debug!(facets = scores.len(), "parallel facet scoring complete");
        Ok(scores)
    }

    /// Score a single facet.
    pub fn score_facet(&self, code: FacetCode, bag: &FeatureBag) -> SpiralResult<FacetScore> {
        bag.validate()?;
        Ok(scorers::scorer_for(code)(bag, &self.normalizer))
    }

    /// Score many bags in parallel. Results keep input order; one invalid
    /// bag does not affect the others.
    pub fn score_batch(&self, bags: &[FeatureBag]) -> Vec<SpiralResult<FacetScores>> {
        let results: Vec<SpiralResult<FacetScores>> =
            bags.par_iter().map(|bag| self.score_facets(bag)).collect();
        debug!(bags = bags.len(), "batch facet scoring complete");
        results
    }
}
