use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use spiral_core::constants::PROBABILITY_TOLERANCE;
use spiral_core::models::*;
use spiral_engine::{AssessmentRequest, ProfileEngine};

fn arb_bag() -> impl Strategy<Value = FeatureBag> {
    (
        (0.0f64..2.0, 0.0f64..10.0, 0.0f64..1.5, any::<bool>(), 0.0f64..8.0),
        (0.0f64..1.2, 0.0f64..60.0, 0.0f64..14.0, any::<bool>()),
        (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0),
    )
        .prop_map(|(c, b, q)| {
            let mut bag = FeatureBag::default();
            bag.conversational.meaning_density = c.0;
            bag.conversational.values_hits = c.1;
            bag.conversational.wholeness_references = c.2;
            bag.conversational.truth_naming = c.3;
            bag.conversational.action_commitment_count = c.4;
            bag.conversational.coherence_markers = c.4;
            bag.behavioral.tasks_completion_rate = b.0;
            bag.behavioral.streak_days = b.1;
            bag.behavioral.rituals_last_7_days = b.2;
            bag.behavioral.journals_last_7_days = b.2;
            bag.behavioral.help_seeking_appropriate = b.3;
            bag.content_quality.sentiment_variance = q.0;
            bag.content_quality.readability_variance = q.1;
            bag.content_quality.avoidance_score = q.2;
            bag
        })
}

proptest! {
    #[test]
    fn any_valid_bag_produces_a_coherent_assessment(
        bag in arb_bag(),
        explicit in 0u8..=100,
        age_days in 0i64..400,
    ) {
        let engine = ProfileEngine::default();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let request = AssessmentRequest::new(bag)
            .with_explicit(
                FacetCode::E2Grounding,
                ExplicitScore::new(explicit, now - Duration::days(age_days)),
            )
            .at(now);

        let assessment = engine.assess(&request).unwrap();
        prop_assert_eq!(assessment.final_scores.len(), 12);
        for score in assessment.final_scores.values() {
            prop_assert!(score.validate().is_ok());
        }

        let total: f64 = assessment.phase.probabilities.values().sum();
        prop_assert!((total - 1.0).abs() < PROBABILITY_TOLERANCE);
        prop_assert!(assessment.phase.primary_confidence >= assessment.phase.secondary_confidence);
        prop_assert_ne!(assessment.phase.primary, assessment.phase.secondary);

        for element in Element::ALL {
            let value = assessment.elemental.value(element);
            prop_assert!((0.0..=100.0).contains(&value));
        }
    }
}
