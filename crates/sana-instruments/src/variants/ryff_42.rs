use sana_core::models::dimension::Dimension;
use sana_core::models::variant::Variant;

use crate::catalog::{DimensionThresholds, OverallThresholds, QuestionnaireItem, VariantConfig};

/// 42-item short form: six dimensions, seven items each, presented in
/// rotating dimension order. The third column marks reverse-keyed items,
/// whose raw response is transformed to `7 - value` before summing.
const ITEMS: [(u32, Dimension, bool); 42] = [
    (1, Dimension::Autonomy, false),
    (2, Dimension::EnvironmentalMastery, false),
    (3, Dimension::PersonalGrowth, true),
    (4, Dimension::PositiveRelations, false),
    (5, Dimension::PurposeInLife, true),
    (6, Dimension::SelfAcceptance, false),
    (7, Dimension::Autonomy, false),
    (8, Dimension::EnvironmentalMastery, false),
    (9, Dimension::PersonalGrowth, false),
    (10, Dimension::PositiveRelations, true),
    (11, Dimension::PurposeInLife, false),
    (12, Dimension::SelfAcceptance, false),
    (13, Dimension::Autonomy, true),
    (14, Dimension::EnvironmentalMastery, true),
    (15, Dimension::PersonalGrowth, true),
    (16, Dimension::PositiveRelations, true),
    (17, Dimension::PurposeInLife, true),
    (18, Dimension::SelfAcceptance, true),
    (19, Dimension::Autonomy, true),
    (20, Dimension::EnvironmentalMastery, false),
    (21, Dimension::PersonalGrowth, false),
    (22, Dimension::PositiveRelations, false),
    (23, Dimension::PurposeInLife, true),
    (24, Dimension::SelfAcceptance, false),
    (25, Dimension::Autonomy, false),
    (26, Dimension::EnvironmentalMastery, true),
    (27, Dimension::PersonalGrowth, true),
    (28, Dimension::PositiveRelations, false),
    (29, Dimension::PurposeInLife, false),
    (30, Dimension::SelfAcceptance, true),
    (31, Dimension::Autonomy, true),
    (32, Dimension::EnvironmentalMastery, true),
    (33, Dimension::PersonalGrowth, false),
    (34, Dimension::PositiveRelations, true),
    (35, Dimension::PurposeInLife, false),
    (36, Dimension::SelfAcceptance, true),
    (37, Dimension::Autonomy, false),
    (38, Dimension::EnvironmentalMastery, false),
    (39, Dimension::PersonalGrowth, true),
    (40, Dimension::PositiveRelations, false),
    (41, Dimension::PurposeInLife, true),
    (42, Dimension::SelfAcceptance, false),
];

pub(crate) fn config() -> VariantConfig {
    VariantConfig {
        variant: Variant::Short,
        items: ITEMS
            .iter()
            .map(|&(id, dimension, reverse_scored)| QuestionnaireItem {
                id,
                dimension,
                reverse_scored,
            })
            .collect(),
        items_per_dimension: 7,
        overall: OverallThresholds {
            at_risk_max: 111,
            moderate_max: 181,
        },
        dimension: DimensionThresholds {
            at_risk_max: 18,
            moderate_max: 30,
        },
    }
}
