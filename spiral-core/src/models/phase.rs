use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Developmental phases, in declaration order (used to break probability ties).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Initiation,
    Grounding,
    Collaboration,
    Transformation,
    Completion,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Initiation,
        Phase::Grounding,
        Phase::Collaboration,
        Phase::Transformation,
        Phase::Completion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Initiation => "initiation",
            Phase::Grounding => "grounding",
            Phase::Collaboration => "collaboration",
            Phase::Transformation => "transformation",
            Phase::Completion => "completion",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probabilistic phase classification with the raw logits kept for debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PhaseInference {
    pub primary: Phase,
    pub primary_confidence: f64,
    pub secondary: Phase,
    pub secondary_confidence: f64,
    pub logits: BTreeMap<Phase, f64>,
    pub probabilities: BTreeMap<Phase, f64>,
}

impl PhaseInference {
    /// All phases sorted by descending probability, ties in declaration order.
    pub fn ranked(&self) -> Vec<(Phase, f64)> {
        let mut ranked: Vec<(Phase, f64)> =
            self.probabilities.iter().map(|(p, v)| (*p, *v)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
