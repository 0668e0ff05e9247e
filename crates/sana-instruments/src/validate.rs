//! Response validation.

use std::collections::BTreeMap;

use sana_core::models::variant::Variant;

use crate::catalog;
use crate::error::ValidationError;

/// A response set that has passed validation: exactly one response per
/// catalog item, every value in 1-6. Only obtainable through [`validate`].
///
/// Values are held in catalog item order, so scoring can walk them alongside
/// the item table without lookups.
#[derive(Debug, Clone)]
pub struct ResponseSet {
    variant: Variant,
    values: Vec<u8>,
}

impl ResponseSet {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.values.iter().copied()
    }
}

/// Check a raw response set against a variant's shape.
///
/// No partial acceptance: the set either fully validates or the whole
/// submission is rejected with the first failure found.
pub fn validate(
    responses: &BTreeMap<u32, u8>,
    variant: Variant,
) -> Result<ResponseSet, ValidationError> {
    let items = catalog::items_for(variant);
    if responses.len() != items.len() {
        return Err(ValidationError::WrongCount {
            expected: items.len(),
            actual: responses.len(),
        });
    }

    let mut values = Vec::with_capacity(items.len());
    for (&item_id, &value) in responses {
        if items.binary_search_by_key(&item_id, |item| item.id).is_err() {
            return Err(ValidationError::UnknownItem { item_id });
        }
        if !(1..=6).contains(&value) {
            return Err(ValidationError::OutOfRange { item_id, value });
        }
        values.push(value);
    }

    // Equal counts plus every key known means exactly one response per item,
    // and BTreeMap iteration order matches the ascending catalog order.
    Ok(ResponseSet { variant, values })
}
