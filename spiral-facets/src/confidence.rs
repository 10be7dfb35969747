//! Shared confidence rule.
//!
//! `confidence = max(0.3, groups_with_any_nonzero / 3)`.
//!
//! This is a coarse data-completeness proxy: it says how many of the three
//! feature groups carried any signal at all. It is not a statistical
//! confidence interval.

use spiral_core::constants::{FEATURE_GROUP_COUNT, MIN_CONFIDENCE};
use spiral_core::models::{FeatureBag, FeatureGroup};

/// Fraction of feature groups with at least one nonzero value.
pub fn coverage(bag: &FeatureBag) -> f64 {
    let covered = FeatureGroup::ALL
        .iter()
        .filter(|group| bag.group_has_signal(**group))
        .count();
    covered as f64 / FEATURE_GROUP_COUNT as f64
}

/// Confidence for every facet scored from this bag.
pub fn calculate(bag: &FeatureBag) -> f64 {
    coverage(bag).max(MIN_CONFIDENCE)
}
