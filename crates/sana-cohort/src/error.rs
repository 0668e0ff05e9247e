use thiserror::Error;

/// Failure of the bulk result read. Aggregation degrades to a zero-valued
/// aggregate rather than surfacing this to callers.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("result read failed: {0}")]
    Read(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Failure of a cache operation. Swallowed at the gateway boundary; callers
/// always keep the direct-computation path.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache unavailable: {0}")]
    Unavailable(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
