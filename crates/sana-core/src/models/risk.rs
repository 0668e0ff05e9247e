use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Individual risk tier. Declared from best to worst so the derived ordering
/// matches "higher is worse".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Healthy,
    Moderate,
    AtRisk,
}

impl RiskLevel {
    /// Human-readable tier name shown in counselor-facing views.
    pub fn display_name(self) -> &'static str {
        match self {
            RiskLevel::Healthy => "Healthy",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::AtRisk => "At Risk",
        }
    }
}

/// Per-tier headcounts for a cohort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskCounts {
    pub healthy: u32,
    pub moderate: u32,
    pub at_risk: u32,
}

impl RiskCounts {
    pub fn bump(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Healthy => self.healthy += 1,
            RiskLevel::Moderate => self.moderate += 1,
            RiskLevel::AtRisk => self.at_risk += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.healthy + self.moderate + self.at_risk
    }
}

/// Presentation color band for a dimension score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ColorToken {
    Green,
    Amber,
    Red,
}
