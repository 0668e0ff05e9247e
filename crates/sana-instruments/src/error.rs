use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Why a raw response set was rejected before scoring.
///
/// Malformed input, not a transient fault: surfaced directly to the caller
/// and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("expected {expected} responses, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("response for item {item_id} is {value}, outside the 1-6 range")]
    OutOfRange { item_id: u32, value: u8 },

    #[error("item {item_id} is not part of this questionnaire")]
    UnknownItem { item_id: u32 },
}
