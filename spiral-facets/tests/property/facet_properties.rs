use proptest::prelude::*;
use spiral_core::constants::{MAX_CONFIDENCE, MIN_CONFIDENCE};
use spiral_core::models::*;
use spiral_facets::{FacetEngine, FeatureNormalizer};

fn arb_bag() -> impl Strategy<Value = FeatureBag> {
    let conversational = (
        (0.0f64..5.0, 0.0f64..20.0, 0.0f64..3.0),
        (any::<bool>(), any::<bool>(), any::<bool>()),
        (0.0f64..20.0, 0.0f64..20.0, 0.0f64..20.0, 0.0f64..20.0),
        (0.0f64..2.0, 0.0f64..2.0),
    )
        .prop_map(
            |(
                (meaning_density, values_hits, wholeness_references),
                (truth_naming, integrity_repair, integration_commitment),
                (action_commitment_count, coherence_markers, meta_references, routine_language),
                (affect_regulation_ok, reciprocity_index),
            )| ConversationalFeatures {
                meaning_density,
                values_hits,
                wholeness_references,
                truth_naming,
                integrity_repair,
                integration_commitment,
                action_commitment_count,
                coherence_markers,
                meta_references,
                routine_language,
                affect_regulation_ok,
                reciprocity_index,
            },
        );
    let behavioral = (
        0.0f64..1.5,
        0.0f64..400.0,
        0.0f64..1.5,
        0.0f64..20.0,
        0.0f64..20.0,
        any::<bool>(),
    )
        .prop_map(
            |(
                tasks_completion_rate,
                streak_days,
                ontime_rate,
                rituals_last_7_days,
                journals_last_7_days,
                help_seeking_appropriate,
            )| BehavioralFeatures {
                tasks_completion_rate,
                streak_days,
                ontime_rate,
                rituals_last_7_days,
                journals_last_7_days,
                help_seeking_appropriate,
            },
        );
    let content_quality = (0.0f64..2.0, 0.0f64..2.0, 0.0f64..2.0).prop_map(
        |(sentiment_variance, readability_variance, avoidance_score)| ContentQualityFeatures {
            sentiment_variance,
            readability_variance,
            avoidance_score,
        },
    );
    (conversational, behavioral, content_quality).prop_map(
        |(conversational, behavioral, content_quality)| FeatureBag {
            conversational,
            behavioral,
            content_quality,
        },
    )
}

proptest! {
    #[test]
    fn scores_and_confidences_stay_in_range(bag in arb_bag()) {
        let engine = FacetEngine::default();
        let scores = engine.score_facets(&bag).unwrap();
        prop_assert_eq!(scores.len(), 12);
        for score in scores.values() {
            prop_assert!(score.score <= 100);
            prop_assert!(score.confidence >= MIN_CONFIDENCE);
            prop_assert!(score.confidence <= MAX_CONFIDENCE);
            prop_assert!(score.validate().is_ok());
        }
    }

    #[test]
    fn normalized_values_stay_in_unit_interval(value in -1_000.0f64..1_000.0) {
        let normalizer = FeatureNormalizer::default();
        for metric in Metric::ALL {
            if normalizer.population().stat(metric).is_some() {
                let n = normalizer.normalize(metric, value);
                prop_assert!((0.0..=1.0).contains(&n));
            }
        }
    }

    #[test]
    fn normalization_is_monotonic(a in 0.0f64..50.0, b in 0.0f64..50.0) {
        let normalizer = FeatureNormalizer::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            normalizer.normalize(Metric::CoherenceMarkers, lo)
                <= normalizer.normalize(Metric::CoherenceMarkers, hi)
        );
    }

    #[test]
    fn more_avoidance_never_raises_adaptability(
        bag in arb_bag(),
        extra in 0.0f64..1.0,
    ) {
        let engine = FacetEngine::default();
        let mut worse = bag.clone();
        worse.content_quality.avoidance_score += extra;
        let base = engine.score_facet(FacetCode::A2Adaptability, &bag).unwrap();
        let after = engine.score_facet(FacetCode::A2Adaptability, &worse).unwrap();
        prop_assert!(after.score <= base.score);
    }
}
