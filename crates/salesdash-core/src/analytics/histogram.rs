use serde::{Deserialize, Serialize};

use crate::analytics::price_range::PRICE_RANGES;
use crate::errors::Result;
use crate::model::Month;
use crate::ops::{GroupKey, GroupValue, RecordStore, Reducer};

/// One bar of the price histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: u64,
}

/// Count the month's records per price range
///
/// Always yields all ten ranges in display order, with zero counts for
/// empty ranges.
///
/// # Errors
///
/// Returns `Persistence` when the store fails.
pub fn price_histogram(store: &dyn RecordStore, month: Month) -> Result<Vec<PriceRangeCount>> {
    let groups = store.aggregate_by_month(month, GroupKey::PriceRange, Reducer::Count)?;

    PRICE_RANGES
        .iter()
        .enumerate()
        .map(|(index, range)| {
            let count = match groups.get(&GroupValue::PriceRange(index)) {
                Some(reduced) => reduced.as_count()?,
                None => 0,
            };
            Ok(PriceRangeCount {
                range: range.label(),
                count,
            })
        })
        .collect()
}
