//! Full-recompute cohort aggregation.

use sana_core::models::cohort::{AssessmentFilter, CohortAggregate};
use sana_core::models::dimension::Dimension;

use crate::store::ResultStore;

/// Recomputes a cohort's statistics from scratch on every call.
///
/// Stateless: concurrent invocations each produce an internally consistent
/// snapshot and converge without coordination, at the cost of redundant work
/// under bursty submission load.
pub struct CohortAggregator<S> {
    store: S,
}

impl<S: ResultStore> CohortAggregator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Aggregate every stored result matching the cohort and filter.
    ///
    /// Never fails: a failed or empty read yields the zero-valued aggregate.
    /// Each record's stored tier and at-risk dimensions are re-read as-is;
    /// classification is never redone here.
    pub async fn aggregate(&self, cohort_id: &str, filter: &AssessmentFilter) -> CohortAggregate {
        let records = match self.store.results_for(cohort_id, filter).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(
                    cohort_id = %cohort_id,
                    error = %err,
                    "result read failed, reporting empty aggregate"
                );
                return CohortAggregate::empty(cohort_id, filter);
            }
        };
        if records.is_empty() {
            return CohortAggregate::empty(cohort_id, filter);
        }

        let mut aggregate = CohortAggregate::empty(cohort_id, filter);
        let mut dimension_sums = [0u64; 6];
        let mut overall_sum = 0u64;
        for record in &records {
            let result = &record.result;
            for (sum, dimension) in dimension_sums.iter_mut().zip(Dimension::ALL) {
                *sum += u64::from(result.dimension_scores.get(dimension));
            }
            overall_sum += u64::from(result.overall_score);
            aggregate.overall_risk_counts.bump(result.overall_risk);
            for &dimension in &result.at_risk_dimensions {
                aggregate.per_dimension_at_risk.bump(dimension);
            }
        }

        let size = records.len() as u32;
        aggregate.sample_size = size;
        aggregate.overall_average = overall_sum as f64 / f64::from(size);
        for (sum, dimension) in dimension_sums.iter().zip(Dimension::ALL) {
            aggregate
                .per_dimension_average
                .set(dimension, *sum as f64 / f64::from(size));
        }
        aggregate
    }
}
