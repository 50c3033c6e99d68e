//! Listing request validation and filter construction

use serde::Deserialize;

use crate::errors::Result;
use crate::model::Month;
use crate::ops::store::Window;
use crate::query::filter::Filter;
use crate::rules::validation::{parse_month, parse_pagination, DEFAULT_PAGE, DEFAULT_PER_PAGE};

/// Raw listing parameters as received on the wire
///
/// Everything is kept as text so that validation can report which
/// parameter was malformed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub month: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

/// Raw parameters for the month-only analytics views
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthParams {
    pub month: Option<String>,
}

impl MonthParams {
    /// Validate the month
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a missing or invalid month.
    pub fn month(&self) -> Result<Month> {
        parse_month(self.month.as_deref())
    }
}

impl From<&ListingParams> for MonthParams {
    fn from(params: &ListingParams) -> Self {
        Self {
            month: params.month.clone(),
        }
    }
}

/// A validated transactions listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub month: Month,
    /// Trimmed search text; empty means no search
    pub search: String,
    /// 1-based page number
    pub page: u64,
    pub per_page: u64,
}

impl ListingRequest {
    /// Build a request with default search and pagination
    pub fn for_month(month: Month) -> Self {
        Self {
            month,
            search: String::new(),
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }

    /// Validate raw parameters
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a missing/invalid month or a non-integer
    /// `page`/`perPage`.
    pub fn from_params(params: &ListingParams) -> Result<Self> {
        let month = parse_month(params.month.as_deref())?;
        let page = parse_pagination("page", params.page.as_deref(), DEFAULT_PAGE)?;
        let per_page = parse_pagination("perPage", params.per_page.as_deref(), DEFAULT_PER_PAGE)?;
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            month,
            search,
            page,
            per_page,
        })
    }

    /// Filter selecting the month plus, when searching, any of the title,
    /// description, or exact-price conditions
    pub fn filter(&self) -> Filter {
        let month = Filter::MonthEq(self.month);
        match search_filter(&self.search) {
            Some(search) => month.and(search),
            None => month,
        }
    }

    /// Skip/limit window for the requested page
    pub fn window(&self) -> Window {
        Window::page(self.page, self.per_page)
    }
}

/// Disjunction for a free-text search, or `None` for blank input
///
/// A price condition is included only when the text parses as a finite
/// number; prices never match by substring.
pub fn search_filter(search: &str) -> Option<Filter> {
    let search = search.trim();
    if search.is_empty() {
        return None;
    }

    let mut conditions = vec![
        Filter::TitleContains(search.to_string()),
        Filter::DescriptionContains(search.to_string()),
    ];
    if let Some(price) = search.parse::<f64>().ok().filter(|p| p.is_finite()) {
        conditions.push(Filter::PriceEq(price));
    }

    Some(Filter::Or(conditions))
}
