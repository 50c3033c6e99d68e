use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::Month;
use crate::ops::{GroupKey, GroupValue, RecordStore, Reducer};

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: u64,
}

/// Count the month's records per category
///
/// Sorted by count descending, then name ascending. Only categories present
/// in the month appear; the empty category is a group of its own.
///
/// # Errors
///
/// Returns `Persistence` when the store fails.
pub fn category_breakdown(store: &dyn RecordStore, month: Month) -> Result<Vec<CategoryCount>> {
    let groups = store.aggregate_by_month(month, GroupKey::Category, Reducer::Count)?;

    let mut breakdown = Vec::with_capacity(groups.len());
    for (group, reduced) in groups {
        if let GroupValue::Category(name) = group {
            breakdown.push(CategoryCount {
                name,
                value: reduced.as_count()?,
            });
        }
    }

    breakdown.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    Ok(breakdown)
}
