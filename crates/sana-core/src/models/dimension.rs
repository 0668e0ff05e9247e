use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the six facets of psychological well-being the questionnaire
/// measures. Every item loads on exactly one dimension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dimension {
    Autonomy,
    EnvironmentalMastery,
    PersonalGrowth,
    PositiveRelations,
    PurposeInLife,
    SelfAcceptance,
}

impl Dimension {
    /// All six dimensions, in canonical order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Autonomy,
        Dimension::EnvironmentalMastery,
        Dimension::PersonalGrowth,
        Dimension::PositiveRelations,
        Dimension::PurposeInLife,
        Dimension::SelfAcceptance,
    ];

    /// Human-readable name shown in counselor-facing views.
    pub fn display_name(self) -> &'static str {
        match self {
            Dimension::Autonomy => "Autonomy",
            Dimension::EnvironmentalMastery => "Environmental Mastery",
            Dimension::PersonalGrowth => "Personal Growth",
            Dimension::PositiveRelations => "Positive Relations with Others",
            Dimension::PurposeInLife => "Purpose in Life",
            Dimension::SelfAcceptance => "Self-Acceptance",
        }
    }
}
