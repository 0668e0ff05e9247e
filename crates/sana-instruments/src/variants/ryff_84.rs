use sana_core::models::dimension::Dimension;
use sana_core::models::variant::Variant;

use crate::catalog::{DimensionThresholds, OverallThresholds, QuestionnaireItem, VariantConfig};

/// 84-item long form: six dimensions, fourteen items each. The first 42
/// positions mirror the short form; the back half extends each dimension
/// with seven further items. The third column marks reverse-keyed items.
const ITEMS: [(u32, Dimension, bool); 84] = [
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
    (43, Dimension::Autonomy, false),
    (44, Dimension::EnvironmentalMastery, false),
    (45, Dimension::PersonalGrowth, true),
    (46, Dimension::PositiveRelations, false),
    (47, Dimension::PurposeInLife, true),
    (48, Dimension::SelfAcceptance, false),
    (49, Dimension::Autonomy, false),
    (50, Dimension::EnvironmentalMastery, true),
    (51, Dimension::PersonalGrowth, false),
    (52, Dimension::PositiveRelations, false),
    (53, Dimension::PurposeInLife, false),
    (54, Dimension::SelfAcceptance, false),
    (55, Dimension::Autonomy, true),
    (56, Dimension::EnvironmentalMastery, true),
    (57, Dimension::PersonalGrowth, false),
    (58, Dimension::PositiveRelations, true),
    (59, Dimension::PurposeInLife, false),
    (60, Dimension::SelfAcceptance, true),
    (61, Dimension::Autonomy, true),
    (62, Dimension::EnvironmentalMastery, false),
    (63, Dimension::PersonalGrowth, false),
    (64, Dimension::PositiveRelations, true),
    (65, Dimension::PurposeInLife, false),
    (66, Dimension::SelfAcceptance, true),
    (67, Dimension::Autonomy, false),
    (68, Dimension::EnvironmentalMastery, true),
    (69, Dimension::PersonalGrowth, true),
    (70, Dimension::PositiveRelations, false),
    (71, Dimension::PurposeInLife, false),
    (72, Dimension::SelfAcceptance, true),
    (73, Dimension::Autonomy, true),
    (74, Dimension::EnvironmentalMastery, false),
    (75, Dimension::PersonalGrowth, true),
    (76, Dimension::PositiveRelations, false),
    (77, Dimension::PurposeInLife, true),
    (78, Dimension::SelfAcceptance, true),
    (79, Dimension::Autonomy, false),
    (80, Dimension::EnvironmentalMastery, true),
    (81, Dimension::PersonalGrowth, true),
    (82, Dimension::PositiveRelations, false),
    (83, Dimension::PurposeInLife, true),
    (84, Dimension::SelfAcceptance, false),
];

pub(crate) fn config() -> VariantConfig {
    VariantConfig {
        variant: Variant::Long,
        items: ITEMS
            .iter()
            .map(|&(id, dimension, reverse_scored)| QuestionnaireItem {
                id,
                dimension,
                reverse_scored,
            })
            .collect(),
        items_per_dimension: 14,
        overall: OverallThresholds {
            at_risk_max: 223,
            moderate_max: 363,
        },
        dimension: DimensionThresholds {
            at_risk_max: 36,
            moderate_max: 60,
        },
    }
}
