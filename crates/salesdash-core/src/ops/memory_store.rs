use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::analytics::price_range::bucket_index;
use crate::errors::{ExError, ExErrorKind, Result};
use crate::model::{Month, SaleRecord};
use crate::ops::store::{
    FoundPage, GroupKey, GroupValue, RecordStore, Reduced, Reducer, SortOrder, Window,
};
use crate::query::Filter;

/// In-memory record store
///
/// Readers clone the current `Arc` snapshot and work without holding the
/// lock; `replace_all` builds the new collection first and swaps it in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Arc<Vec<SaleRecord>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records`
    pub fn with_records(records: Vec<SaleRecord>) -> Self {
        Self {
            records: RwLock::new(Arc::new(records)),
        }
    }

    fn snapshot(&self) -> Result<Arc<Vec<SaleRecord>>> {
        self.records
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| poisoned("snapshot"))
    }
}

fn poisoned(op: &str) -> ExError {
    ExError::new(ExErrorKind::Concurrency)
        .with_op(op)
        .with_message("record store lock poisoned")
}

fn group_of(record: &SaleRecord, key: GroupKey) -> GroupValue {
    match key {
        GroupKey::Category => GroupValue::Category(record.category.clone()),
        GroupKey::Sold => GroupValue::Sold(record.sold),
        GroupKey::PriceRange => GroupValue::PriceRange(bucket_index(record.price)),
    }
}

impl RecordStore for MemoryStore {
    fn replace_all(&self, records: Vec<SaleRecord>) -> Result<usize> {
        let count = records.len();
        let fresh = Arc::new(records);
        let mut guard = self.records.write().map_err(|_| poisoned("replace_all"))?;
        *guard = fresh;
        Ok(count)
    }

    fn find(&self, filter: &Filter, window: Window, sort: SortOrder) -> Result<Vec<SaleRecord>> {
        Ok(self.find_page(filter, window, sort)?.records)
    }

    fn find_page(&self, filter: &Filter, window: Window, sort: SortOrder) -> Result<FoundPage> {
        let snapshot = self.snapshot()?;
        let mut matched: Vec<&SaleRecord> = snapshot.iter().filter(|r| filter.matches(r)).collect();
        // Stable sort keeps insertion order for full ties
        matched.sort_by(|a, b| sort.compare(a, b));
        Ok(FoundPage {
            total: matched.len() as u64,
            records: window.apply(matched.into_iter().cloned()),
        })
    }

    fn count(&self, filter: &Filter) -> Result<u64> {
        let snapshot = self.snapshot()?;
        Ok(snapshot.iter().filter(|r| filter.matches(r)).count() as u64)
    }

    fn aggregate_by_month(
        &self,
        month: Month,
        key: GroupKey,
        reducer: Reducer,
    ) -> Result<BTreeMap<GroupValue, Reduced>> {
        let snapshot = self.snapshot()?;
        let mut groups: BTreeMap<GroupValue, Reduced> = BTreeMap::new();
        for record in snapshot.iter().filter(|r| r.month() == month) {
            groups
                .entry(group_of(record, key))
                .or_insert_with(|| Reduced::zero(reducer))
                .accumulate(record);
        }
        Ok(groups)
    }

    fn record_count(&self) -> Result<u64> {
        Ok(self.snapshot()?.len() as u64)
    }
}
