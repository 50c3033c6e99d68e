//! Request-to-filter translation for the listing and analytics views

pub mod filter;
pub mod listing;

pub use filter::Filter;
pub use listing::{ListingParams, ListingRequest, MonthParams};
