use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::dimension::Dimension;
use crate::models::risk::RiskLevel;
use crate::models::variant::Variant;

/// Integer score sums, one per dimension. Each sum lies in
/// `[items_per_dimension, items_per_dimension * 6]` for its variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DimensionScores {
    pub autonomy: u32,
    pub environmental_mastery: u32,
    pub personal_growth: u32,
    pub positive_relations: u32,
    pub purpose_in_life: u32,
    pub self_acceptance: u32,
}

impl DimensionScores {
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

    pub fn add(&mut self, dimension: Dimension, value: u32) {
        match dimension {
            Dimension::Autonomy => self.autonomy += value,
            Dimension::EnvironmentalMastery => self.environmental_mastery += value,
            Dimension::PersonalGrowth => self.personal_growth += value,
            Dimension::PositiveRelations => self.positive_relations += value,
            Dimension::PurposeInLife => self.purpose_in_life += value,
            Dimension::SelfAcceptance => self.self_acceptance += value,
        }
    }

    /// Sum across all six dimensions.
    pub fn total(&self) -> u32 {
        Dimension::ALL.into_iter().map(|d| self.get(d)).sum()
    }
}

/// The scored outcome of a single questionnaire submission.
///
/// Immutable once produced: a correction produces a new result, never a
/// mutation of this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IndividualResult {
    pub variant: Variant,
    pub dimension_scores: DimensionScores,
    pub overall_score: u32,
    pub overall_risk: RiskLevel,
    /// Dimensions at or below the informational at-risk bound. Highlighted
    /// in reports; never feeds back into `overall_risk`.
    pub at_risk_dimensions: BTreeSet<Dimension>,
}

/// A persisted result as returned by the bulk-read boundary, wrapped with the
/// submission metadata the aggregator filters on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResultRecord {
    pub id: Uuid,
    pub cohort_id: String,
    pub assessment: String,
    pub submitted_at: jiff::Timestamp,
    pub result: IndividualResult,
}
