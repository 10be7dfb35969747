use std::collections::BTreeMap;

use proptest::prelude::*;
use spiral_core::errors::SpiralError;
use spiral_core::models::*;

fn arb_bag() -> impl Strategy<Value = FeatureBag> {
    (
        (0.0f64..5.0, 0.0f64..20.0, any::<bool>(), 0.0f64..10.0),
        (0.0f64..1.0, 0.0f64..400.0, 0u8..=14, any::<bool>()),
        (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0),
    )
        .prop_map(|(c, b, q)| {
            let mut bag = FeatureBag::default();
            bag.conversational.meaning_density = c.0;
            bag.conversational.values_hits = c.1;
            bag.conversational.truth_naming = c.2;
            bag.conversational.coherence_markers = c.3;
            bag.behavioral.tasks_completion_rate = b.0;
            bag.behavioral.streak_days = b.1;
            bag.behavioral.rituals_last_7_days = f64::from(b.2);
            bag.behavioral.help_seeking_appropriate = b.3;
            bag.content_quality.sentiment_variance = q.0;
            bag.content_quality.readability_variance = q.1;
            bag.content_quality.avoidance_score = q.2;
            bag
        })
}

proptest! {
    #[test]
    fn non_negative_finite_bags_validate(bag in arb_bag()) {
        prop_assert!(bag.validate().is_ok());
    }

    #[test]
    fn any_negative_numeric_metric_is_rejected(
        bag in arb_bag(),
        index in 0usize..Metric::ALL.len(),
        magnitude in 0.001f64..1_000.0,
    ) {
        let metric = Metric::ALL[index];
        prop_assume!(!metric.is_flag());

        let mut json = serde_json::to_value(&bag).unwrap();
        let group = match metric.group() {
            FeatureGroup::Conversational => "conversational",
            FeatureGroup::Behavioral => "behavioral",
            FeatureGroup::ContentQuality => "content_quality",
        };
        json[group][metric.name()] = serde_json::json!(-magnitude);
        let bad: FeatureBag = serde_json::from_value(json).unwrap();

        match bad.validate() {
            Err(SpiralError::InvalidFeature { field, .. }) => prop_assert_eq!(field, metric.name()),
            other => prop_assert!(false, "expected InvalidFeature, got {:?}", other),
        }
    }

    #[test]
    fn facet_score_validation_matches_ranges(
        index in 0usize..12,
        score in any::<u8>(),
        confidence in 0.0f64..1.5,
    ) {
        let code = FacetCode::ALL[index];
        let facet = FacetScore::implicit(code, score, confidence, BTreeMap::new());
        let in_range = score <= 100 && (0.3..=1.0).contains(&confidence);
        prop_assert_eq!(facet.validate().is_ok(), in_range);
    }
}
