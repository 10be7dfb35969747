use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::errors::{SpiralError, SpiralResult};

/// Signals extracted from conversation text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ConversationalFeatures {
    pub meaning_density: f64,
    pub values_hits: f64,
    pub wholeness_references: f64,
    pub truth_naming: bool,
    pub integrity_repair: bool,
    pub integration_commitment: bool,
    pub action_commitment_count: f64,
    pub coherence_markers: f64,
    pub meta_references: f64,
    pub routine_language: f64,
    pub affect_regulation_ok: f64,
    pub reciprocity_index: f64,
}

/// Signals extracted from activity records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct BehavioralFeatures {
    pub tasks_completion_rate: f64,
    pub streak_days: f64,
    pub ontime_rate: f64,
    pub rituals_last_7_days: f64,
    pub journals_last_7_days: f64,
    pub help_seeking_appropriate: bool,
}

/// Signals describing the quality of written content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct ContentQualityFeatures {
    pub sentiment_variance: f64,
    pub readability_variance: f64,
    pub avoidance_score: f64,
}

/// The engine's input: one immutable snapshot of a user's signals.
///
/// Missing fields deserialize to zero/false. That is the only place a 0
/// default is accepted; facet-level inputs to aggregation never default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct FeatureBag {
    pub conversational: ConversationalFeatures,
    pub behavioral: BehavioralFeatures,
    pub content_quality: ContentQualityFeatures,
}

/// The three feature groups, used by the confidence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureGroup {
    Conversational,
    Behavioral,
    ContentQuality,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 3] = [
        FeatureGroup::Conversational,
        FeatureGroup::Behavioral,
        FeatureGroup::ContentQuality,
    ];
}

/// Every named metric in a feature bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    MeaningDensity,
    ValuesHits,
    WholenessReferences,
    TruthNaming,
    IntegrityRepair,
    IntegrationCommitment,
    ActionCommitmentCount,
    CoherenceMarkers,
    MetaReferences,
    RoutineLanguage,
    AffectRegulationOk,
    ReciprocityIndex,
    TasksCompletionRate,
    StreakDays,
    OntimeRate,
    RitualsLast7Days,
    JournalsLast7Days,
    HelpSeekingAppropriate,
    SentimentVariance,
    ReadabilityVariance,
    AvoidanceScore,
}

impl Metric {
    pub const ALL: [Metric; 21] = [
        Metric::MeaningDensity,
        Metric::ValuesHits,
        Metric::WholenessReferences,
        Metric::TruthNaming,
        Metric::IntegrityRepair,
        Metric::IntegrationCommitment,
        Metric::ActionCommitmentCount,
        Metric::CoherenceMarkers,
        Metric::MetaReferences,
        Metric::RoutineLanguage,
        Metric::AffectRegulationOk,
        Metric::ReciprocityIndex,
        Metric::TasksCompletionRate,
        Metric::StreakDays,
        Metric::OntimeRate,
        Metric::RitualsLast7Days,
        Metric::JournalsLast7Days,
        Metric::HelpSeekingAppropriate,
        Metric::SentimentVariance,
        Metric::ReadabilityVariance,
        Metric::AvoidanceScore,
    ];

    /// Snake-case field name, also used as the evidence-weight key.
    pub fn name(self) -> &'static str {
        match self {
            Metric::MeaningDensity => "meaning_density",
            Metric::ValuesHits => "values_hits",
            Metric::WholenessReferences => "wholeness_references",
            Metric::TruthNaming => "truth_naming",
            Metric::IntegrityRepair => "integrity_repair",
            Metric::IntegrationCommitment => "integration_commitment",
            Metric::ActionCommitmentCount => "action_commitment_count",
            Metric::CoherenceMarkers => "coherence_markers",
            Metric::MetaReferences => "meta_references",
            Metric::RoutineLanguage => "routine_language",
            Metric::AffectRegulationOk => "affect_regulation_ok",
            Metric::ReciprocityIndex => "reciprocity_index",
            Metric::TasksCompletionRate => "tasks_completion_rate",
            Metric::StreakDays => "streak_days",
            Metric::OntimeRate => "ontime_rate",
            Metric::RitualsLast7Days => "rituals_last_7_days",
            Metric::JournalsLast7Days => "journals_last_7_days",
            Metric::HelpSeekingAppropriate => "help_seeking_appropriate",
            Metric::SentimentVariance => "sentiment_variance",
            Metric::ReadabilityVariance => "readability_variance",
            Metric::AvoidanceScore => "avoidance_score",
        }
    }

    /// Which group the metric belongs to.
    pub fn group(self) -> FeatureGroup {
        match self {
            Metric::MeaningDensity
            | Metric::ValuesHits
            | Metric::WholenessReferences
            | Metric::TruthNaming
            | Metric::IntegrityRepair
            | Metric::IntegrationCommitment
            | Metric::ActionCommitmentCount
            | Metric::CoherenceMarkers
            | Metric::MetaReferences
            | Metric::RoutineLanguage
            | Metric::AffectRegulationOk
            | Metric::ReciprocityIndex => FeatureGroup::Conversational,
            Metric::TasksCompletionRate
            | Metric::StreakDays
            | Metric::OntimeRate
            | Metric::RitualsLast7Days
            | Metric::JournalsLast7Days
            | Metric::HelpSeekingAppropriate => FeatureGroup::Behavioral,
            Metric::SentimentVariance | Metric::ReadabilityVariance | Metric::AvoidanceScore => {
                FeatureGroup::ContentQuality
            }
        }
    }

    /// Boolean metrics are coerced to 0/1 and never fail validation.
    pub fn is_flag(self) -> bool {
        matches!(
            self,
            Metric::TruthNaming
                | Metric::IntegrityRepair
                | Metric::IntegrationCommitment
                | Metric::HelpSeekingAppropriate
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

impl FeatureBag {
    /// Raw value of a metric, booleans coerced to 0/1.
    pub fn metric(&self, metric: Metric) -> f64 {
        let c = &self.conversational;
        let b = &self.behavioral;
        let q = &self.content_quality;
        match metric {
            Metric::MeaningDensity => c.meaning_density,
            Metric::ValuesHits => c.values_hits,
            Metric::WholenessReferences => c.wholeness_references,
            Metric::TruthNaming => flag(c.truth_naming),
            Metric::IntegrityRepair => flag(c.integrity_repair),
            Metric::IntegrationCommitment => flag(c.integration_commitment),
            Metric::ActionCommitmentCount => c.action_commitment_count,
            Metric::CoherenceMarkers => c.coherence_markers,
            Metric::MetaReferences => c.meta_references,
            Metric::RoutineLanguage => c.routine_language,
            Metric::AffectRegulationOk => c.affect_regulation_ok,
            Metric::ReciprocityIndex => c.reciprocity_index,
            Metric::TasksCompletionRate => b.tasks_completion_rate,
            Metric::StreakDays => b.streak_days,
            Metric::OntimeRate => b.ontime_rate,
            Metric::RitualsLast7Days => b.rituals_last_7_days,
            Metric::JournalsLast7Days => b.journals_last_7_days,
            Metric::HelpSeekingAppropriate => flag(b.help_seeking_appropriate),
            Metric::SentimentVariance => q.sentiment_variance,
            Metric::ReadabilityVariance => q.readability_variance,
            Metric::AvoidanceScore => q.avoidance_score,
        }
    }

    /// Whether any metric in the group is nonzero.
    pub fn group_has_signal(&self, group: FeatureGroup) -> bool {
        Metric::ALL
            .iter()
            .filter(|m| m.group() == group)
            .any(|m| self.metric(*m) != 0.0)
    }

    /// Boundary check run before any scorer: every numeric metric must be
    /// finite and non-negative.
    pub fn validate(&self) -> SpiralResult<()> {
        for metric in Metric::ALL.iter().filter(|m| !m.is_flag()) {
            let value = self.metric(*metric);
            if !value.is_finite() {
                return Err(SpiralError::InvalidFeature {
                    field: metric.name().to_string(),
                    reason: format!("must be finite, got {value}"),
                });
            }
            if value < 0.0 {
                return Err(SpiralError::InvalidFeature {
                    field: metric.name().to_string(),
                    reason: format!("must be non-negative, got {value}"),
                });
            }
        }
        Ok(())
    }
}
