//! Request correlation and log field names shared by every SalesDash crate

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
