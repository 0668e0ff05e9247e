//! Background aggregate refresh.
//!
//! New submissions enqueue a refresh request instead of recomputing inline:
//! the submission path never blocks on, or fails because of, aggregation.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use sana_core::models::cohort::AssessmentFilter;

use crate::cache::{Cache, CacheGateway};
use crate::store::ResultStore;

/// One queued recompute.
#[derive(Debug, Clone)]
pub struct RefreshRequest {
    pub cohort_id: String,
    pub filter: AssessmentFilter,
}

/// Fire-and-forget handle the submission path uses to request a recompute.
#[derive(Clone)]
pub struct RefreshQueue {
    tx: mpsc::UnboundedSender<RefreshRequest>,
}

impl RefreshQueue {
    /// Enqueue a refresh. Never blocks; if the worker is gone the request is
    /// dropped and the next TTL expiry picks up the change.
    pub fn request(&self, cohort_id: impl Into<String>, filter: AssessmentFilter) {
        let request = RefreshRequest {
            cohort_id: cohort_id.into(),
            filter,
        };
        if self.tx.send(request).is_err() {
            tracing::debug!("refresh worker stopped, dropping request");
        }
    }
}

/// Spawn the refresh worker.
///
/// Per request the worker invalidates the cohort's cached aggregates,
/// recomputes, and re-primes the cache; failures are logged and never
/// propagate. The worker drains its queue and exits once every
/// [`RefreshQueue`] handle has been dropped.
pub fn spawn_refresh_worker<S, C>(gateway: CacheGateway<S, C>) -> (RefreshQueue, JoinHandle<()>)
where
    S: ResultStore + 'static,
    C: Cache + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<RefreshRequest>();
    let handle = tokio::spawn(async move {
        tracing::info!("aggregate refresh worker started");
        while let Some(request) = rx.recv().await {
            gateway.invalidate_cohort(&request.cohort_id).await;
            let aggregate = gateway.refresh(&request.cohort_id, &request.filter).await;
            tracing::debug!(
                cohort_id = %request.cohort_id,
                sample_size = aggregate.sample_size,
                "refreshed cohort aggregate"
            );
        }
        tracing::info!("aggregate refresh worker stopped");
    });
    (RefreshQueue { tx }, handle)
}
