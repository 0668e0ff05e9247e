//! Bulk read boundary for stored results.

use std::sync::{Arc, Mutex, PoisonError};

use sana_core::models::cohort::AssessmentFilter;
use sana_core::models::result::ResultRecord;

use crate::error::StoreError;

/// Read access to the full set of stored results for a cohort.
///
/// Implemented by the serving layer over its relational store; the in-memory
/// adapter below backs tests and local runs.
pub trait ResultStore: Send + Sync {
    /// Every stored result matching the cohort and filter.
    fn results_for(
        &self,
        cohort_id: &str,
        filter: &AssessmentFilter,
    ) -> impl Future<Output = Result<Vec<ResultRecord>, StoreError>> + Send;
}

impl<S: ResultStore> ResultStore for Arc<S> {
    async fn results_for(
        &self,
        cohort_id: &str,
        filter: &AssessmentFilter,
    ) -> Result<Vec<ResultRecord>, StoreError> {
        self.as_ref().results_for(cohort_id, filter).await
    }
}

/// In-memory store used by tests and single-process deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ResultRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: ResultRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

impl ResultStore for MemoryStore {
    async fn results_for(
        &self,
        cohort_id: &str,
        filter: &AssessmentFilter,
    ) -> Result<Vec<ResultRecord>, StoreError> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records
            .iter()
            .filter(|record| {
                record.cohort_id == cohort_id
                    && record.assessment == filter.assessment
                    && filter
                        .variant
                        .map_or(true, |variant| record.result.variant == variant)
            })
            .cloned()
            .collect())
    }
}
