use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A facet score the user reported directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExplicitScore {
    /// 0–100.
    pub score: u8,
    pub taken_at: DateTime<Utc>,
}

impl ExplicitScore {
    pub fn new(score: u8, taken_at: DateTime<Utc>) -> Self {
        Self { score, taken_at }
    }
}
