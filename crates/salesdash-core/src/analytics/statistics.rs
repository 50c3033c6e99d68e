use serde::{Deserialize, Serialize};

use crate::analytics::round_cents;
use crate::errors::Result;
use crate::model::Month;
use crate::ops::{GroupKey, GroupValue, RecordStore, Reducer};

/// Summary totals for one month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleStatistics {
    /// Sum of sold prices, rounded to cents
    pub total_sale_amount: f64,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

/// Compute the month's sale statistics
///
/// Counts and the sold amount come from a single aggregate so they always
/// describe the same collection.
///
/// # Errors
///
/// Returns `Persistence` when the store fails.
pub fn sale_statistics(store: &dyn RecordStore, month: Month) -> Result<SaleStatistics> {
    let tallies = store.aggregate_by_month(month, GroupKey::Sold, Reducer::CountAndSumPrice)?;

    let (mut stats, mut sold_amount) = (SaleStatistics::default(), 0.0);
    for (group, tally) in &tallies {
        match group {
            GroupValue::Sold(true) => {
                stats.total_sold_items = tally.as_count()?;
                sold_amount = tally.as_sum()?;
            }
            GroupValue::Sold(false) => stats.total_not_sold_items = tally.as_count()?,
            _ => {}
        }
    }

    stats.total_sale_amount = round_cents(sold_amount);
    Ok(stats)
}
