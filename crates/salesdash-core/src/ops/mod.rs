pub mod memory_store;
pub mod store;

pub use memory_store::MemoryStore;
pub use store::{
    FoundPage, GroupKey, GroupValue, RecordStore, Reduced, Reducer, SortOrder, Window,
};
