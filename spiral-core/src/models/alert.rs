use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::facet::FacetCode;

/// Alert rule identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AlertCode {
    LowGrounding,
    AvoidanceSpike,
}

impl AlertCode {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertCode::LowGrounding => "low_grounding",
            AlertCode::AvoidanceSpike => "avoidance_spike",
        }
    }
}

impl fmt::Display for AlertCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgently an alert should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Action,
}

/// An actionable notice produced by the alert rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Alert {
    pub code: AlertCode,
    pub severity: AlertSeverity,
    pub message: String,
    pub recommendation: String,
    pub facets_affected: Vec<FacetCode>,
}
