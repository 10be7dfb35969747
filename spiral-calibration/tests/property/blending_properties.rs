use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use spiral_calibration::blending::decayed_weight;
use spiral_calibration::{blend_breakdown, blend_scores};
use spiral_core::config::BlendingConfig;
use spiral_core::models::*;

proptest! {
    #[test]
    fn blended_score_lies_between_inputs(
        implicit in 0u8..=100,
        explicit in 0u8..=100,
        days in 0i64..2_000,
    ) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let config = BlendingConfig::default();
        let score = FacetScore::implicit(FacetCode::W1Attunement, implicit, 1.0, BTreeMap::new());
        let report = ExplicitScore::new(explicit, now - Duration::days(days));
        let blended = blend_scores(&score, Some(&report), now, &config);
        prop_assert!(blended.score >= implicit.min(explicit));
        prop_assert!(blended.score <= implicit.max(explicit));
        prop_assert!(blended.validate().is_ok());
    }

    #[test]
    fn weight_is_monotonically_decreasing(days in 0i64..5_000) {
        let config = BlendingConfig::default();
        prop_assert!(decayed_weight(days + 1, &config) <= decayed_weight(days, &config));
        prop_assert!(decayed_weight(days, &config) <= config.explicit_weight);
    }

    #[test]
    fn calibration_flag_matches_threshold(implicit in 0u8..=100, explicit in 0u8..=100) {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let config = BlendingConfig::default();
        let score = FacetScore::implicit(FacetCode::C1Integration, implicit, 1.0, BTreeMap::new());
        let report = ExplicitScore::new(explicit, now);
        let breakdown = blend_breakdown(&score, &report, now, &config);
        let diff = (i16::from(explicit) - i16::from(implicit)).abs();
        prop_assert_eq!(breakdown.calibration_needed, diff > 25);
    }
}
