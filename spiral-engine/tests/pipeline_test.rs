use chrono::{DateTime, Duration, Utc};
use spiral_core::config::SpiralConfig;
use spiral_core::errors::{ConfigError, SpiralError};
use spiral_core::models::*;
use spiral_core::traits::IProfileEngine;
use spiral_engine::{AssessmentRequest, ProfileEngine};
use test_fixtures::{assessment_goldens, load_fixture, AssessmentGolden, FacetGolden};

fn request_from(golden: &AssessmentGolden) -> AssessmentRequest {
    let now: DateTime<Utc> = golden.now.parse().unwrap();
    AssessmentRequest {
        features: golden.features.clone(),
        explicit_scores: golden.explicit_scores.clone(),
        previous_scores: golden.previous_scores.clone(),
        now: Some(now),
    }
}

fn balanced_bag() -> FeatureBag {
    load_fixture::<FacetGolden>("golden/facets/balanced.json").features
}

// ── Golden scenarios ─────────────────────────────────────────────────────

#[test]
fn assessment_goldens_match() {
    let engine = ProfileEngine::default();
    for (name, golden) in assessment_goldens() {
        let assessment = engine.assess(&request_from(&golden)).unwrap();
        let expected = &golden.expected;

        let finals: Vec<(FacetCode, u8)> = assessment
            .final_scores
            .iter()
            .map(|(code, score)| (*code, score.score))
            .collect();
        let wanted: Vec<(FacetCode, u8)> = expected
            .final_scores
            .iter()
            .map(|(code, score)| (*code, *score))
            .collect();
        assert_eq!(finals, wanted, "{name}: final scores");

        assert_eq!(assessment.phase.primary, expected.primary_phase, "{name}: primary");
        assert_eq!(assessment.phase.secondary, expected.secondary_phase, "{name}: secondary");

        let codes: Vec<&str> = assessment.alerts.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, expected.alert_codes, "{name}: alerts");
        assert_eq!(
            assessment.calibration_needed, expected.calibration_needed,
            "{name}: calibration"
        );
    }
}

#[test]
fn self_reports_only_touch_their_facets() {
    let engine = ProfileEngine::default();
    let golden: AssessmentGolden = load_fixture("golden/assessment/recent_self_report.json");
    let assessment = engine.assess(&request_from(&golden)).unwrap();

    for (code, implicit) in &assessment.implicit_scores {
        let final_score = &assessment.final_scores[code];
        if golden.explicit_scores.contains_key(code) {
            assert_eq!(final_score.source, ScoreSource::Blended);
        } else {
            assert_eq!(final_score, implicit);
        }
    }
    assert_eq!(assessment.implicit_scores[&FacetCode::W1Attunement].score, 88);
}

#[test]
fn elemental_profile_reflects_blended_scores() {
    let engine = ProfileEngine::default();
    let golden: AssessmentGolden = load_fixture("golden/assessment/recent_self_report.json");
    let assessment = engine.assess(&request_from(&golden)).unwrap();

    // water = mean(W1 57, W2 70)
    assert!((assessment.elemental.water - 63.5).abs() < 1e-9);
    // earth = mean(E1 72, E2 62, C2 42)
    assert!((assessment.elemental.earth - 176.0 / 3.0).abs() < 1e-9);
    assert_eq!(assessment.elemental.confidence, 1.0);
}

#[test]
fn slump_raises_both_alerts_with_severities() {
    let engine = ProfileEngine::default();
    let golden: AssessmentGolden = load_fixture("golden/assessment/grounding_slump.json");
    let assessment = engine.assess(&request_from(&golden)).unwrap();

    let severities: Vec<AlertSeverity> = assessment.alerts.iter().map(|a| a.severity).collect();
    assert_eq!(severities, vec![AlertSeverity::Warning, AlertSeverity::Action]);
}

#[test]
fn without_history_the_slump_only_warns() {
    let engine = ProfileEngine::default();
    let golden: AssessmentGolden = load_fixture("golden/assessment/grounding_slump.json");
    let mut request = request_from(&golden);
    request.previous_scores = None;

    let assessment = engine.assess(&request).unwrap();
    let codes: Vec<AlertCode> = assessment.alerts.iter().map(|a| a.code).collect();
    assert_eq!(codes, vec![AlertCode::LowGrounding]);
}

// ── Trait surface ────────────────────────────────────────────────────────

#[test]
fn trait_operations_compose() {
    let engine = ProfileEngine::default();
    let scores = engine.score_facets(&balanced_bag()).unwrap();
    assert_eq!(scores.len(), 12);

    let elemental = engine.calculate_elemental_profile(&scores).unwrap();
    assert_eq!(elemental.dominant(), Element::Water);

    let phase = engine.infer_phase(&scores).unwrap();
    assert_eq!(phase.primary, Phase::Collaboration);
    assert_eq!(phase.secondary, Phase::Completion);

    assert!(engine.detect_alerts(&scores, None).is_empty());
}

#[test]
fn trait_blend_defaults_now_to_current_time() {
    let engine = ProfileEngine::default();
    let scores = engine.score_facets(&balanced_bag()).unwrap();
    let implicit = &scores[&FacetCode::F2Courage];

    let explicit = ExplicitScore::new(60, Utc::now() - Duration::minutes(1));
    let blended = engine.blend_scores(implicit, Some(&explicit), None);
    // 0.65·60 + 0.35·80 = 67
    assert_eq!(blended.score, 67);
    assert_eq!(blended.evidence_weights["explicit"], 0.65);

    let untouched = engine.blend_scores(implicit, None, None);
    assert_eq!(&untouched, implicit);
}

#[test]
fn engine_is_usable_as_trait_object() {
    let engine: Box<dyn IProfileEngine> = Box::new(ProfileEngine::default());
    let scores = engine.score_facets(&FeatureBag::default()).unwrap();
    assert!(scores.values().all(|s| s.score == 0 && s.confidence == 0.3));
}

#[test]
fn blend_breakdown_uses_engine_policy() {
    let mut config = SpiralConfig::default();
    config.blending.explicit_weight = 0.5;
    let engine = ProfileEngine::new(config).unwrap();
    let implicit = FacetScore::implicit(FacetCode::A1Reflection, 20, 1.0, Default::default());
    let now = Utc::now();
    let breakdown = engine.blend_breakdown(&implicit, &ExplicitScore::new(80, now), now);
    assert_eq!(breakdown.decayed_weight, 0.5);
    assert!((breakdown.raw_blended - 50.0).abs() < 1e-9);
    assert!(breakdown.calibration_needed);
}

// ── Failure modes ────────────────────────────────────────────────────────

#[test]
fn invalid_bag_fails_the_assessment() {
    let engine = ProfileEngine::default();
    let mut bag = balanced_bag();
    bag.behavioral.streak_days = -3.0;

    let err = engine.assess(&AssessmentRequest::new(bag)).unwrap_err();
    match err {
        SpiralError::InvalidFeature { field, .. } => assert_eq!(field, "streak_days"),
        other => panic!("expected InvalidFeature, got {other:?}"),
    }
}

#[test]
fn partial_scores_are_rejected_by_every_aggregation() {
    let engine = ProfileEngine::default();
    let mut scores = engine.score_facets(&balanced_bag()).unwrap();
    scores.remove(&FacetCode::C1Integration);

    assert!(matches!(
        engine.infer_phase(&scores),
        Err(SpiralError::MissingInput { facet: FacetCode::C1Integration })
    ));
    assert!(matches!(
        engine.calculate_elemental_profile(&scores),
        Err(SpiralError::MissingInput { facet: FacetCode::C1Integration })
    ));
}

#[test]
fn elemental_profile_rejects_two_missing_facets() {
    let engine = ProfileEngine::default();
    let mut scores = engine.score_facets(&balanced_bag()).unwrap();
    scores.remove(&FacetCode::E2Grounding);
    scores.remove(&FacetCode::W1Attunement);

    match engine.calculate_elemental_profile(&scores) {
        Err(SpiralError::MissingInput { facet }) => assert_eq!(facet, FacetCode::E2Grounding),
        other => panic!("expected MissingInput, got {other:?}"),
    }
}

#[test]
fn unvalidated_config_is_rejected_at_construction() {
    let mut config = SpiralConfig::default();
    config.blending.decay_half_life_days = 0.0;

    match ProfileEngine::new(config) {
        Err(SpiralError::Config(ConfigError::ValidationFailed { field, .. })) => {
            assert_eq!(field, "blending.decay_half_life_days");
        }
        other => panic!("expected a config validation error, got {other:?}"),
    }
}

#[test]
fn out_of_range_alert_threshold_is_rejected_at_construction() {
    let mut config = SpiralConfig::default();
    config.alerts.avoidance_spike_ratio = 0.5;
    assert!(matches!(
        ProfileEngine::new(config),
        Err(SpiralError::Config(_))
    ));
}

#[test]
fn batch_keeps_order_and_isolates_failures() {
    let engine = ProfileEngine::default();
    let mut bad = balanced_bag();
    bad.content_quality.sentiment_variance = f64::NAN;

    let requests = vec![
        AssessmentRequest::new(balanced_bag()),
        AssessmentRequest::new(bad),
        AssessmentRequest::new(FeatureBag::default()),
    ];
    let results = engine.assess_batch(&requests);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().phase.primary, Phase::Collaboration);
    assert!(results[1].is_err());
    assert_eq!(results[2].as_ref().unwrap().phase.primary, Phase::Initiation);
}

#[test]
fn parallel_scoring_matches_sequential() {
    let engine = ProfileEngine::default();
    let bag = balanced_bag();
    assert_eq!(
        engine.score_facets_parallel(&bag).unwrap(),
        engine.score_facets(&bag).unwrap()
    );
}

// ── Configuration ────────────────────────────────────────────────────────

#[test]
fn engine_loads_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spiral.toml");
    std::fs::write(&path, "[alerts]\nlow_grounding_threshold = 60\n").unwrap();

    let engine = ProfileEngine::from_file(&path).unwrap();
    assert_eq!(engine.config().alerts.low_grounding_threshold, 60);

    let scores = engine.score_facets(&balanced_bag()).unwrap();
    let codes: Vec<AlertCode> = engine
        .detect_alerts(&scores, None)
        .iter()
        .map(|a| a.code)
        .collect();
    assert_eq!(codes, vec![AlertCode::LowGrounding]);
}

#[test]
fn bad_config_file_surfaces_as_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spiral.toml");
    std::fs::write(&path, "[blending]\nexplicit_weight = 1.5\n").unwrap();

    assert!(matches!(
        ProfileEngine::from_file(&path),
        Err(SpiralError::Config(_))
    ));
}

#[test]
fn assessment_serializes_with_wire_names() {
    let engine = ProfileEngine::default();
    let golden: AssessmentGolden = load_fixture("golden/assessment/grounding_slump.json");
    let assessment = engine.assess(&request_from(&golden)).unwrap();

    let json = serde_json::to_value(&assessment).unwrap();
    assert_eq!(json["phase"]["primary"], "completion");
    assert_eq!(json["alerts"][0]["code"], "low_grounding");
    assert_eq!(json["alerts"][1]["severity"], "action");
    assert_eq!(json["final_scores"]["E2_Grounding"]["score"], 11);
    assert_eq!(json["final_scores"]["E2_Grounding"]["source"], "implicit");
}
