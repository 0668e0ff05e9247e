use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A fixed questionnaire length. Each variant carries its own item table,
/// reverse-scoring flags, and risk thresholds, resolved once at catalog load
/// and immutable for the process lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Variant {
    Short,
    Long,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Short, Variant::Long];

    /// Stable wire identifier, used in cache keys and stored records.
    pub fn key(self) -> &'static str {
        match self {
            Variant::Short => "ryff_42",
            Variant::Long => "ryff_84",
        }
    }

    pub fn item_count(self) -> usize {
        match self {
            Variant::Short => 42,
            Variant::Long => 84,
        }
    }

    /// Items per dimension: 7 for the short form, 14 for the long form.
    pub fn items_per_dimension(self) -> usize {
        self.item_count() / 6
    }
}

impl FromStr for Variant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ryff_42" => Ok(Variant::Short),
            "ryff_84" => Ok(Variant::Long),
            other => Err(CoreError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
