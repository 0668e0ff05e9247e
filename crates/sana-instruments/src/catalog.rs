//! Variant catalog: item tables and thresholds, resolved once per process.

use std::sync::LazyLock;

use sana_core::models::dimension::Dimension;
use sana_core::models::variant::Variant;

use crate::variants;

/// A single questionnaire item: which dimension it loads on and whether its
/// raw 1-6 response must be reversed before summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionnaireItem {
    pub id: u32,
    pub dimension: Dimension,
    pub reverse_scored: bool,
}

/// Overall-score cut points. Inclusive at both bounds: at or below
/// `at_risk_max` is AtRisk, at or below `moderate_max` is Moderate, above is
/// Healthy.
#[derive(Debug, Clone, Copy)]
pub struct OverallThresholds {
    pub at_risk_max: u32,
    pub moderate_max: u32,
}

/// Per-dimension cut points. `at_risk_max` drives the at-risk dimension
/// list; `moderate_max` only drives the display color band.
#[derive(Debug, Clone, Copy)]
pub struct DimensionThresholds {
    pub at_risk_max: u32,
    pub moderate_max: u32,
}

/// Everything the pipeline needs to know about one variant, fixed for the
/// process lifetime.
///
/// Item ids are contiguous from 1, in presentation order, so the table index
/// of an item is always `id - 1`.
#[derive(Debug, Clone)]
pub struct VariantConfig {
    pub variant: Variant,
    pub items: Vec<QuestionnaireItem>,
    pub items_per_dimension: usize,
    pub overall: OverallThresholds,
    pub dimension: DimensionThresholds,
}

pub fn config_for(variant: Variant) -> &'static VariantConfig {
    static SHORT: LazyLock<VariantConfig> = LazyLock::new(variants::ryff_42::config);
    static LONG: LazyLock<VariantConfig> = LazyLock::new(variants::ryff_84::config);

    match variant {
        Variant::Short => &SHORT,
        Variant::Long => &LONG,
    }
}

/// The ordered item table for a variant.
pub fn items_for(variant: Variant) -> &'static [QuestionnaireItem] {
    &config_for(variant).items
}

/// How many items load on each dimension: 7 for the short form, 14 for the
/// long form.
pub fn dimension_item_count(variant: Variant) -> usize {
    config_for(variant).items_per_dimension
}
