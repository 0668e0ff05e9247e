//! Cache-aside layer over aggregation.
//!
//! Fail-open by contract: a cache miss, error, or total unavailability never
//! blocks or fails an aggregation; the direct-computation path always
//! remains.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use sana_core::cache_keys;
use sana_core::models::cohort::{AssessmentFilter, CohortAggregate};

use crate::aggregate::CohortAggregator;
use crate::error::CacheError;
use crate::store::ResultStore;

/// Key-value cache with per-entry TTL. May be absent or unreachable at any
/// time; callers treat every error as a miss.
pub trait Cache: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CacheError>> + Send;

    fn set(
        &self,
        key: &str,
        value: String,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), CacheError>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = Result<(), CacheError>> + Send;

    /// Remove every entry whose key starts with `prefix`. Returns how many
    /// entries were removed.
    fn delete_by_prefix(&self, prefix: &str)
    -> impl Future<Output = Result<u64, CacheError>> + Send;
}

impl<C: Cache> Cache for Arc<C> {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.as_ref().get(key).await
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        self.as_ref().set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.as_ref().delete(key).await
    }

    async fn delete_by_prefix(&self, prefix: &str) -> Result<u64, CacheError> {
        self.as_ref().delete_by_prefix(prefix).await
    }
}

/// In-memory TTL cache for tests and single-process deployments. Expiry is
/// checked on read; expired entries are dropped lazily.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, Instant)>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        match entries.get(key).cloned() {
            Some((_, expires_at)) if expires_at <= Instant::now() => {
                entries.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let expires_at = Instant::now() + ttl;
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), (value, expires_at));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }

    async fn delete_by_prefix(&self, prefix: &str) -> Result<u64, CacheError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(prefix));
        Ok((before - entries.len()) as u64)
    }
}

/// Read-through gateway: consult the cache, fall back to a full recompute,
/// best-effort re-prime.
///
/// The TTL bounds staleness; readers get "cache reflects data as of its last
/// refresh or TTL expiry", nothing stronger.
pub struct CacheGateway<S, C> {
    aggregator: CohortAggregator<S>,
    cache: C,
    ttl: Duration,
}

impl<S: ResultStore, C: Cache> CacheGateway<S, C> {
    pub fn new(aggregator: CohortAggregator<S>, cache: C, ttl: Duration) -> Self {
        Self {
            aggregator,
            cache,
            ttl,
        }
    }

    /// The cohort aggregate, from cache when present and fresh, recomputed
    /// otherwise. Cache trouble never fails the call.
    pub async fn cached_aggregate(
        &self,
        cohort_id: &str,
        filter: &AssessmentFilter,
    ) -> CohortAggregate {
        let key = cache_keys::cohort_aggregate(cohort_id, filter);
        match self.cache.get(&key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(aggregate) => return aggregate,
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "discarding undecodable cache entry");
                }
            },
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "cache read failed, computing directly");
            }
        }

        let aggregate = self.aggregator.aggregate(cohort_id, filter).await;
        self.prime(&key, &aggregate).await;
        aggregate
    }

    /// Recompute ignoring any cached entry, then re-prime the cache.
    pub async fn refresh(&self, cohort_id: &str, filter: &AssessmentFilter) -> CohortAggregate {
        let aggregate = self.aggregator.aggregate(cohort_id, filter).await;
        let key = cache_keys::cohort_aggregate(cohort_id, filter);
        self.prime(&key, &aggregate).await;
        aggregate
    }

    /// Drop every cached aggregate for a cohort, across assessments and
    /// variants.
    pub async fn invalidate_cohort(&self, cohort_id: &str) {
        let prefix = cache_keys::cohort_prefix(cohort_id);
        match self.cache.delete_by_prefix(&prefix).await {
            Ok(removed) => {
                tracing::debug!(prefix = %prefix, removed, "invalidated cohort cache");
            }
            Err(err) => {
                tracing::warn!(prefix = %prefix, error = %err, "cache invalidation failed");
            }
        }
    }

    async fn prime(&self, key: &str, aggregate: &CohortAggregate) {
        let raw = match serde_json::to_string(aggregate) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "aggregate serialization failed, skipping cache write");
                return;
            }
        };
        if let Err(err) = self.cache.set(key, raw, self.ttl).await {
            tracing::warn!(key = %key, error = %err, "cache write failed");
        }
    }
}
