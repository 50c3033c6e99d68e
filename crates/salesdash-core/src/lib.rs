//! SalesDash Core - domain kernel for the transaction dashboard
//!
//! This crate provides the foundational data structures and rules, including:
//! - The `SaleRecord` model and the validated `Month` type
//! - The canonical error facility (`ExError`, `ExErrorKind`) and domain errors
//! - A structured logging facility with profile-based initialization
//! - Filter expressions and listing request validation
//! - Price ranges and analytics reducers
//! - The `RecordStore` trait and an in-memory implementation

pub mod analytics;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod query;
pub mod rules;

pub use salesdash_core_types as core_types;

// Re-export commonly used types
pub use errors::{DashError, ExError, ExErrorKind, Result};
pub use model::{Month, SaleRecord};
pub use ops::{MemoryStore, RecordStore};
pub use query::{Filter, ListingParams, ListingRequest, MonthParams};
