use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::dimension::Dimension;
use crate::models::risk::RiskCounts;
use crate::models::variant::Variant;

/// Which submissions an aggregation covers: one named assessment, optionally
/// narrowed to a single questionnaire variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentFilter {
    pub assessment: String,
    /// `None` aggregates across both variants.
    pub variant: Option<Variant>,
}

impl AssessmentFilter {
    pub fn any_variant(assessment: impl Into<String>) -> Self {
        Self {
            assessment: assessment.into(),
            variant: None,
        }
    }

    pub fn for_variant(assessment: impl Into<String>, variant: Variant) -> Self {
        Self {
            assessment: assessment.into(),
            variant: Some(variant),
        }
    }
}

/// Mean dimension scores across a cohort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionAverages {
    pub autonomy: f64,
    pub environmental_mastery: f64,
    pub personal_growth: f64,
    pub positive_relations: f64,
    pub purpose_in_life: f64,
    pub self_acceptance: f64,
}

impl DimensionAverages {
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Autonomy => self.autonomy,
            Dimension::EnvironmentalMastery => self.environmental_mastery,
            Dimension::PersonalGrowth => self.personal_growth,
            Dimension::PositiveRelations => self.positive_relations,
            Dimension::PurposeInLife => self.purpose_in_life,
            Dimension::SelfAcceptance => self.self_acceptance,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Autonomy => self.autonomy = value,
            Dimension::EnvironmentalMastery => self.environmental_mastery = value,
            Dimension::PersonalGrowth => self.personal_growth = value,
            Dimension::PositiveRelations => self.positive_relations = value,
            Dimension::PurposeInLife => self.purpose_in_life = value,
            Dimension::SelfAcceptance => self.self_acceptance = value,
        }
    }
}

/// Per-dimension at-risk headcounts across a cohort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionCounts {
    pub autonomy: u32,
    pub environmental_mastery: u32,
    pub personal_growth: u32,
    pub positive_relations: u32,
    pub purpose_in_life: u32,
    pub self_acceptance: u32,
}

impl DimensionCounts {
    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Autonomy => self.autonomy,
            Dimension::EnvironmentalMastery => self.environmental_mastery,
            Dimension::PersonalGrowth => self.personal_growth,
            Dimension::PositiveRelations => self.positive_relations,
            Dimension::PurposeInLife => self.purpose_in_life,
            Dimension::SelfAcceptance => self.self_acceptance,
        }
    }

    pub fn bump(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Autonomy => self.autonomy += 1,
            Dimension::EnvironmentalMastery => self.environmental_mastery += 1,
            Dimension::PersonalGrowth => self.personal_growth += 1,
            Dimension::PositiveRelations => self.positive_relations += 1,
            Dimension::PurposeInLife => self.purpose_in_life += 1,
            Dimension::SelfAcceptance => self.self_acceptance += 1,
        }
    }
}

/// Cohort-level statistics, always recomputed in full from the current set of
/// individual results, never patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CohortAggregate {
    pub cohort_id: String,
    /// `None` means the aggregate spans both variants.
    pub variant: Option<Variant>,
    pub per_dimension_average: DimensionAverages,
    pub per_dimension_at_risk: DimensionCounts,
    pub overall_average: f64,
    pub overall_risk_counts: RiskCounts,
    pub sample_size: u32,
}

impl CohortAggregate {
    /// The zero-valued aggregate reported when a cohort has no results or the
    /// underlying read fails.
    pub fn empty(cohort_id: impl Into<String>, filter: &AssessmentFilter) -> Self {
        Self {
            cohort_id: cohort_id.into(),
            variant: filter.variant,
            per_dimension_average: DimensionAverages::default(),
            per_dimension_at_risk: DimensionCounts::default(),
            overall_average: 0.0,
            overall_risk_counts: RiskCounts::default(),
            sample_size: 0,
        }
    }
}
