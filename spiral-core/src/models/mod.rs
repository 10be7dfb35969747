pub mod alert;
pub mod element;
pub mod explicit_score;
pub mod facet;
pub mod feature_bag;
pub mod phase;

pub use alert::{Alert, AlertCode, AlertSeverity};
pub use element::{Element, ElementalProfile};
pub use explicit_score::ExplicitScore;
pub use facet::{FacetCode, FacetScore, FacetScores, ScoreSource};
pub use feature_bag::{
    BehavioralFeatures, ContentQualityFeatures, ConversationalFeatures, FeatureBag, FeatureGroup,
    Metric,
};
pub use phase::{Phase, PhaseInference};
