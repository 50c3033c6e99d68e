use crate::errors::{DashError, ExError, ExErrorKind, Result};
use crate::model::{Month, SaleRecord};

/// Default page number when `page` is absent
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size when `perPage` is absent
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Validate the required `month` request parameter
///
/// Blank values count as absent.
///
/// # Errors
///
/// Returns `InvalidInput` when the month is missing, not an integer, or
/// outside 1..=12.
pub fn parse_month(raw: Option<&str>) -> Result<Month> {
    let raw = raw.ok_or(DashError::MonthMissing)?;
    Ok(raw.parse::<Month>()?)
}

/// Validate an optional pagination parameter (`page` or `perPage`)
///
/// Absent or blank values yield `default`; integers below 1 are coerced to 1.
///
/// # Errors
///
/// Returns `InvalidInput` naming `param` when the value is not an integer.
pub fn parse_pagination(param: &str, raw: Option<&str>, default: u64) -> Result<u64> {
    let trimmed = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(v) => v,
    };

    let value = trimmed
        .parse::<i64>()
        .map_err(|_| DashError::PaginationInvalid {
            param: param.to_string(),
            raw: trimmed.to_string(),
        })?;

    Ok(value.max(1) as u64)
}

/// Validate a record before it enters the store
///
/// # Errors
///
/// Returns `InvalidInput` naming the record when its price is negative or
/// not finite.
pub fn validate_record(record: &SaleRecord) -> Result<()> {
    if !record.price.is_finite() || record.price < 0.0 {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("validate_record")
            .with_field(format!("record {}", record.id))
            .with_message(format!(
                "price must be a non-negative number, got {}",
                record.price
            )));
    }
    Ok(())
}
