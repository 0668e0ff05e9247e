//! Score summation.

use sana_core::models::result::DimensionScores;

use crate::catalog;
use crate::validate::ResponseSet;

/// Reverse-keyed Likert transform. Involutive over the 1-6 range.
pub fn reverse(value: u8) -> u8 {
    7 - value
}

/// Sum a validated response set into per-dimension totals and the overall
/// total.
///
/// Exact integer arithmetic throughout; averaging and percentage display
/// belong to downstream layers.
pub fn score_responses(set: &ResponseSet) -> (DimensionScores, u32) {
    let items = catalog::items_for(set.variant());
    let mut scores = DimensionScores::default();
    for (item, value) in items.iter().zip(set.values()) {
        let adjusted = if item.reverse_scored {
            reverse(value)
        } else {
            value
        };
        scores.add(item.dimension, u32::from(adjusted));
    }
    let overall = scores.total();
    (scores, overall)
}
