use spiral_core::models::{FacetCode, Phase};

/// Logit coefficients per phase, applied to 0–100 facet scores.
///
/// Domain constants, not learned.
pub const PHASE_COEFFICIENTS: [(Phase, &[(FacetCode, f64)]); 5] = [
    (
        Phase::Initiation,
        &[
            (FacetCode::F1Meaning, 1.2),
            (FacetCode::F2Courage, 1.1),
            (FacetCode::A2Adaptability, 0.8),
            (FacetCode::E2Grounding, -0.5),
        ],
    ),
    (
        Phase::Grounding,
        &[
            (FacetCode::E2Grounding, 1.2),
            (FacetCode::E1Coherence, 1.0),
            (FacetCode::C1Integration, 0.6),
            (FacetCode::A2Adaptability, -0.4),
        ],
    ),
    (
        Phase::Collaboration,
        &[
            (FacetCode::W2Belonging, 1.2),
            (FacetCode::W1Attunement, 1.0),
            (FacetCode::C2Integrity, 0.7),
        ],
    ),
    (
        Phase::Transformation,
        &[
            (FacetCode::A1Reflection, 1.1),
            (FacetCode::A2Adaptability, 0.9),
            (FacetCode::F2Courage, 0.6),
        ],
    ),
    (
        Phase::Completion,
        &[
            (FacetCode::AE2Fulfillment, 1.1),
            (FacetCode::AE1Values, 0.9),
            (FacetCode::E1Coherence, 0.6),
        ],
    ),
];
