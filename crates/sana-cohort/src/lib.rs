//! sana-cohort
//!
//! Cohort-level aggregation over stored individual results: the result-store
//! read boundary, a fail-open TTL cache gateway, and the background refresh
//! worker that re-primes a cohort's aggregate after new submissions.

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod store;
pub mod worker;
