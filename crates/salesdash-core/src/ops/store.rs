//! Record store contract shared by every backend

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::errors::{ExError, ExErrorKind, Result};
use crate::model::{Month, SaleRecord};
use crate::query::Filter;

/// Skip/limit window applied after filtering and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub skip: u64,
    /// `None` means unbounded
    pub limit: Option<u64>,
}

impl Window {
    /// Every matching record
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Window for a 1-based page of `per_page` records
    pub fn page(page: u64, per_page: u64) -> Self {
        Self {
            skip: page.saturating_sub(1).saturating_mul(per_page),
            limit: Some(per_page),
        }
    }

    /// Apply the window to an already sorted sequence
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let iter = items.into_iter().skip(skip);
        match self.limit {
            Some(limit) => iter.take(usize::try_from(limit).unwrap_or(usize::MAX)).collect(),
            None => iter.collect(),
        }
    }
}

/// Result ordering for `find`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest sale first; ties by `id` ascending, then insertion order
    #[default]
    DateOfSaleDesc,
    Insertion,
}

impl SortOrder {
    /// Compare two records; `Insertion` treats everything as equal so a
    /// stable sort keeps the stored order
    pub fn compare(&self, a: &SaleRecord, b: &SaleRecord) -> Ordering {
        match self {
            SortOrder::DateOfSaleDesc => b
                .date_of_sale
                .cmp(&a.date_of_sale)
                .then_with(|| a.id.cmp(&b.id)),
            SortOrder::Insertion => Ordering::Equal,
        }
    }
}

/// Grouping dimension for month aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKey {
    Category,
    Sold,
    PriceRange,
}

/// One group produced by an aggregate
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupValue {
    Category(String),
    Sold(bool),
    /// Index into [`crate::analytics::PRICE_RANGES`]
    PriceRange(usize),
}

/// Per-group reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reducer {
    Count,
    SumPrice,
    /// Count and price sum from the same pass
    CountAndSumPrice,
}

/// Reduced value for a group
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduced {
    Count(u64),
    Sum(f64),
    Tally { count: u64, sum: f64 },
}

impl Reduced {
    /// # Errors
    ///
    /// Returns `Internal` for a plain `Sum`, which carries no count.
    pub fn as_count(&self) -> Result<u64> {
        match self {
            Reduced::Count(n) | Reduced::Tally { count: n, .. } => Ok(*n),
            Reduced::Sum(_) => Err(wrong_reduction("count", self)),
        }
    }

    /// # Errors
    ///
    /// Returns `Internal` for a plain `Count`, which carries no sum.
    pub fn as_sum(&self) -> Result<f64> {
        match self {
            Reduced::Sum(s) | Reduced::Tally { sum: s, .. } => Ok(*s),
            Reduced::Count(_) => Err(wrong_reduction("sum", self)),
        }
    }

    /// Starting value for a reducer
    pub fn zero(reducer: Reducer) -> Self {
        match reducer {
            Reducer::Count => Reduced::Count(0),
            Reducer::SumPrice => Reduced::Sum(0.0),
            Reducer::CountAndSumPrice => Reduced::Tally { count: 0, sum: 0.0 },
        }
    }

    /// Fold one record into the running value
    pub fn accumulate(&mut self, record: &SaleRecord) {
        match self {
            Reduced::Count(n) => *n += 1,
            Reduced::Sum(s) => *s += record.price,
            Reduced::Tally { count, sum } => {
                *count += 1;
                *sum += record.price;
            }
        }
    }
}

fn wrong_reduction(wanted: &str, got: &Reduced) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("reduce")
        .with_message(format!("expected a {} reduction, got {:?}", wanted, got))
}

/// A window of matching records together with the unwindowed match count,
/// both read from the same version of the collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FoundPage {
    pub records: Vec<SaleRecord>,
    pub total: u64,
}

/// Storage abstraction over the seeded sale records
///
/// Implementations must make `replace_all` atomic with respect to readers:
/// each read call observes either the old collection or the new one in
/// full. Separate calls may straddle a replacement, so anything that must
/// agree with itself goes through one call (`find_page`, or
/// `aggregate_by_month` with `Reducer::CountAndSumPrice`).
pub trait RecordStore: Send + Sync {
    /// Replace the whole collection, returning the number of records stored
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the backend fails; the previous
    /// collection is left in place.
    fn replace_all(&self, records: Vec<SaleRecord>) -> Result<usize>;

    /// Records matching `filter`, sorted, then windowed
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the backend fails.
    fn find(&self, filter: &Filter, window: Window, sort: SortOrder) -> Result<Vec<SaleRecord>>;

    /// One window of `find` plus the total match count, from one view
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the backend fails.
    fn find_page(&self, filter: &Filter, window: Window, sort: SortOrder) -> Result<FoundPage>;

    /// Number of records matching `filter`
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the backend fails.
    fn count(&self, filter: &Filter) -> Result<u64>;

    /// Group the month's records by `key` and reduce each group
    ///
    /// Groups without records are absent from the result.
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the backend fails.
    fn aggregate_by_month(
        &self,
        month: Month,
        key: GroupKey,
        reducer: Reducer,
    ) -> Result<BTreeMap<GroupValue, Reduced>>;

    /// Total number of stored records
    ///
    /// # Errors
    ///
    /// Returns `Persistence` when the backend fails.
    fn record_count(&self) -> Result<u64> {
        self.count(&Filter::all())
    }
}
