use std::collections::BTreeMap;

use proptest::prelude::*;
use spiral_core::constants::PROBABILITY_TOLERANCE;
use spiral_core::models::*;
use spiral_profile::{aggregate, infer};

fn arb_scores() -> impl Strategy<Value = FacetScores> {
    (
        prop::array::uniform12(0u8..=100),
        prop::array::uniform12(0.3f64..=1.0),
    )
        .prop_map(|(values, confidences)| {
            FacetCode::ALL
                .iter()
                .zip(values.iter().zip(confidences.iter()))
                .map(|(code, (v, c))| (*code, FacetScore::implicit(*code, *v, *c, BTreeMap::new())))
                .collect()
        })
}

proptest! {
    #[test]
    fn probabilities_sum_to_one(scores in arb_scores()) {
        let inference = infer(&scores).unwrap();
        let total: f64 = inference.probabilities.values().sum();
        prop_assert!((total - 1.0).abs() < PROBABILITY_TOLERANCE);
        prop_assert!(inference.primary_confidence >= inference.secondary_confidence);
        prop_assert!(inference.primary != inference.secondary);
        for (phase, p) in &inference.probabilities {
            prop_assert!(*p <= inference.primary_confidence);
            if *phase != inference.primary {
                prop_assert!(*p <= inference.secondary_confidence);
            }
        }
    }

    #[test]
    fn elemental_values_stay_in_score_range(scores in arb_scores()) {
        let profile = aggregate(&scores).unwrap();
        for element in Element::ALL {
            let v = profile.value(element);
            prop_assert!((0.0..=100.0).contains(&v));
        }
        prop_assert!((0.3 - 1e-12..=1.0 + 1e-12).contains(&profile.confidence));
    }

    #[test]
    fn elemental_values_are_member_means(scores in arb_scores()) {
        let profile = aggregate(&scores).unwrap();
        for element in Element::ALL {
            let members: Vec<f64> = FacetCode::ALL
                .iter()
                .filter(|c| c.element() == element)
                .map(|c| f64::from(scores[c].score))
                .collect();
            let expected = members.iter().sum::<f64>() / members.len() as f64;
            prop_assert!((profile.value(element) - expected).abs() < 1e-9);
        }
    }
}
