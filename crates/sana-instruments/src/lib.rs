//! sana-instruments
//!
//! Questionnaire definitions and the scoring pipeline. Pure data and
//! arithmetic — no I/O. Defines the item tables, reverse-scoring flags,
//! thresholds, validation, and risk classification for each supported
//! variant.

pub mod catalog;
pub mod classify;
pub mod display;
pub mod error;
pub mod scoring;
pub mod validate;
pub mod variants;

use std::collections::{BTreeMap, BTreeSet};

use sana_core::models::dimension::Dimension;
use sana_core::models::result::{DimensionScores, IndividualResult};
use sana_core::models::risk::RiskLevel;
use sana_core::models::variant::Variant;

use crate::classify::RiskClassifier;
use crate::error::ValidationError;

/// Score one submission end to end: validate, sum, classify.
///
/// All-or-nothing: any validation failure rejects the whole submission and
/// nothing is scored.
pub fn score(
    responses: &BTreeMap<u32, u8>,
    variant: Variant,
) -> Result<IndividualResult, ValidationError> {
    let set = validate::validate(responses, variant)?;
    let (dimension_scores, overall_score) = scoring::score_responses(&set);
    let classifier = RiskClassifier::for_variant(variant);
    Ok(IndividualResult {
        variant,
        dimension_scores,
        overall_score,
        overall_risk: classifier.classify_overall(overall_score),
        at_risk_dimensions: classifier.at_risk_dimensions(&dimension_scores),
    })
}

/// Classify an overall score against a variant's fixed thresholds.
pub fn classify_overall(overall_score: u32, variant: Variant) -> RiskLevel {
    RiskClassifier::for_variant(variant).classify_overall(overall_score)
}

/// The dimensions whose scores sit at or below the variant's informational
/// at-risk bound.
pub fn at_risk_dimensions(scores: &DimensionScores, variant: Variant) -> BTreeSet<Dimension> {
    RiskClassifier::for_variant(variant).at_risk_dimensions(scores)
}
