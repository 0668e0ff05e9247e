//! Cache key conventions.
//!
//! Pure string functions — no cache client dependency. These define the
//! canonical layout of entries in the aggregate cache.

use crate::models::cohort::AssessmentFilter;

pub fn cohort_aggregate(cohort_id: &str, filter: &AssessmentFilter) -> String {
    let variant = filter.variant.map_or("all", |v| v.key());
    format!("cohort:{cohort_id}:{}:{variant}", filter.assessment)
}

/// Prefix covering every cached aggregate for a cohort, across assessments
/// and variants. Used for pattern invalidation after a new submission.
pub fn cohort_prefix(cohort_id: &str) -> String {
    format!("cohort:{cohort_id}:")
}
