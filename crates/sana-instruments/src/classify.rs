//! Risk classification against fixed per-variant thresholds.

use std::collections::BTreeSet;

use sana_core::models::dimension::Dimension;
use sana_core::models::result::DimensionScores;
use sana_core::models::risk::RiskLevel;
use sana_core::models::variant::Variant;

use crate::catalog::{self, DimensionThresholds, OverallThresholds};

/// Applies a variant's threshold tables.
///
/// Thresholds are injected at construction and never read from ambient
/// state.
#[derive(Debug, Clone, Copy)]
pub struct RiskClassifier {
    overall: OverallThresholds,
    dimension: DimensionThresholds,
}

impl RiskClassifier {
    pub fn for_variant(variant: Variant) -> Self {
        let config = catalog::config_for(variant);
        Self {
            overall: config.overall,
            dimension: config.dimension,
        }
    }

    pub fn new(overall: OverallThresholds, dimension: DimensionThresholds) -> Self {
        Self { overall, dimension }
    }

    /// Tier for the scalar overall score. Per-dimension status never feeds
    /// into this.
    pub fn classify_overall(&self, overall_score: u32) -> RiskLevel {
        if overall_score <= self.overall.at_risk_max {
            RiskLevel::AtRisk
        } else if overall_score <= self.overall.moderate_max {
            RiskLevel::Moderate
        } else {
            RiskLevel::Healthy
        }
    }

    /// Whether a single dimension score sits at or below the informational
    /// at-risk bound.
    pub fn dimension_at_risk(&self, dimension_score: u32) -> bool {
        dimension_score <= self.dimension.at_risk_max
    }

    /// The dimensions flagged for report highlighting. Informational only.
    pub fn at_risk_dimensions(&self, scores: &DimensionScores) -> BTreeSet<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|&dimension| self.dimension_at_risk(scores.get(dimension)))
            .collect()
    }
}
