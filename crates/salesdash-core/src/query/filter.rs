//! Tagged filter expressions over sale records
//!
//! Every store backend evaluates the same expression tree: the in-memory
//! store through [`Filter::matches`], the SQLite store by compiling it to a
//! parameterized `WHERE` clause.

use crate::model::{Month, SaleRecord};

/// Predicate over a [`SaleRecord`]
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Sale date (UTC) falls in the given month of any year
    MonthEq(Month),
    /// Literal substring of the title, ASCII case-insensitive
    TitleContains(String),
    /// Literal substring of the description, ASCII case-insensitive
    DescriptionContains(String),
    /// Exact numeric equality on price
    PriceEq(f64),
    Sold(bool),
    /// All children match; an empty list matches everything
    And(Vec<Filter>),
    /// Any child matches; an empty list matches nothing
    Or(Vec<Filter>),
}

impl Filter {
    /// Filter that matches every record
    pub fn all() -> Self {
        Filter::And(Vec::new())
    }

    /// Combine with another filter, flattening nested `And`s
    pub fn and(self, other: Filter) -> Self {
        match self {
            Filter::And(mut children) => {
                children.push(other);
                Filter::And(children)
            }
            first => Filter::And(vec![first, other]),
        }
    }

    /// Evaluate against a single record
    pub fn matches(&self, record: &SaleRecord) -> bool {
        match self {
            Filter::MonthEq(month) => record.month() == *month,
            Filter::TitleContains(needle) => contains_folded(&record.title, needle),
            Filter::DescriptionContains(needle) => contains_folded(&record.description, needle),
            Filter::PriceEq(price) => record.price == *price,
            Filter::Sold(sold) => record.sold == *sold,
            Filter::And(children) => children.iter().all(|f| f.matches(record)),
            Filter::Or(children) => children.iter().any(|f| f.matches(record)),
        }
    }
}

/// ASCII case-insensitive literal substring test
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
