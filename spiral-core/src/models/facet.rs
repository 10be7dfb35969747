use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::element::Element;
use crate::constants::{MAX_CONFIDENCE, MIN_CONFIDENCE, SCORE_MAX};
use crate::errors::{SpiralError, SpiralResult};

/// The twelve facet identifiers. Serialized verbatim (`"F1_Meaning"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FacetCode {
    #[serde(rename = "F1_Meaning")]
    F1Meaning,
    #[serde(rename = "F2_Courage")]
    F2Courage,
    #[serde(rename = "E1_Coherence")]
    E1Coherence,
    #[serde(rename = "E2_Grounding")]
    E2Grounding,
    #[serde(rename = "W1_Attunement")]
    W1Attunement,
    #[serde(rename = "W2_Belonging")]
    W2Belonging,
    #[serde(rename = "A1_Reflection")]
    A1Reflection,
    #[serde(rename = "A2_Adaptability")]
    A2Adaptability,
    #[serde(rename = "AE1_Values")]
    AE1Values,
    #[serde(rename = "AE2_Fulfillment")]
    AE2Fulfillment,
    #[serde(rename = "C1_Integration")]
    C1Integration,
    #[serde(rename = "C2_Integrity")]
    C2Integrity,
}

impl FacetCode {
    pub const ALL: [FacetCode; 12] = [
        FacetCode::F1Meaning,
        FacetCode::F2Courage,
        FacetCode::E1Coherence,
        FacetCode::E2Grounding,
        FacetCode::W1Attunement,
        FacetCode::W2Belonging,
        FacetCode::A1Reflection,
        FacetCode::A2Adaptability,
        FacetCode::AE1Values,
        FacetCode::AE2Fulfillment,
        FacetCode::C1Integration,
        FacetCode::C2Integrity,
    ];

    /// Wire identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            FacetCode::F1Meaning => "F1_Meaning",
            FacetCode::F2Courage => "F2_Courage",
            FacetCode::E1Coherence => "E1_Coherence",
            FacetCode::E2Grounding => "E2_Grounding",
            FacetCode::W1Attunement => "W1_Attunement",
            FacetCode::W2Belonging => "W2_Belonging",
            FacetCode::A1Reflection => "A1_Reflection",
            FacetCode::A2Adaptability => "A2_Adaptability",
            FacetCode::AE1Values => "AE1_Values",
            FacetCode::AE2Fulfillment => "AE2_Fulfillment",
            FacetCode::C1Integration => "C1_Integration",
            FacetCode::C2Integrity => "C2_Integrity",
        }
    }

    /// Static facet → element table. Every facet belongs to exactly one element.
    pub fn element(self) -> Element {
        match self {
            FacetCode::F1Meaning | FacetCode::F2Courage => Element::Fire,
            FacetCode::E1Coherence | FacetCode::E2Grounding | FacetCode::C2Integrity => {
                Element::Earth
            }
            FacetCode::W1Attunement | FacetCode::W2Belonging => Element::Water,
            FacetCode::A1Reflection | FacetCode::A2Adaptability => Element::Air,
            FacetCode::AE1Values | FacetCode::AE2Fulfillment | FacetCode::C1Integration => {
                Element::Aether
            }
        }
    }
}

impl fmt::Display for FacetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a facet score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    /// Computed from behavioral/linguistic signals.
    Implicit,
    /// Self-reported by the user.
    Explicit,
    /// Time-decayed mix of the two.
    Blended,
}

/// One facet's score with its audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacetScore {
    pub code: FacetCode,
    /// 0–100.
    pub score: u8,
    /// 0.3–1.0. A data-completeness proxy, not a statistical interval.
    pub confidence: f64,
    /// Seven-day trend. Supplied by the caller from stored history; always 0 here.
    pub delta_7d: f64,
    /// Coefficients used by the scoring formula, keyed by input name.
    pub evidence_weights: BTreeMap<String, f64>,
    pub source: ScoreSource,
}

impl FacetScore {
    /// Build an implicit score. `delta_7d` starts at 0.
    pub fn implicit(
        code: FacetCode,
        score: u8,
        confidence: f64,
        evidence_weights: BTreeMap<String, f64>,
    ) -> Self {
        Self {
            code,
            score,
            confidence,
            delta_7d: 0.0,
            evidence_weights,
            source: ScoreSource::Implicit,
        }
    }

    /// Check the score and confidence ranges.
    pub fn validate(&self) -> SpiralResult<()> {
        if self.score > SCORE_MAX {
            return Err(SpiralError::InvalidRange {
                facet: self.code,
                field: "score",
                value: f64::from(self.score),
            });
        }
        if !(MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&self.confidence) {
            return Err(SpiralError::InvalidRange {
                facet: self.code,
                field: "confidence",
                value: self.confidence,
            });
        }
        Ok(())
    }
}

/// A full or partial set of facet scores, ordered by facet declaration.
pub type FacetScores = BTreeMap<FacetCode, FacetScore>;
