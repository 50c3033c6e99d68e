use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DashError;

/// Calendar month (1 = January … 12 = December), independent of year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 12;

    /// Build a month from its number
    ///
    /// # Errors
    ///
    /// Returns `MonthInvalid` when `number` is outside 1..=12.
    pub fn new(number: u32) -> Result<Self, DashError> {
        if (Self::MIN..=Self::MAX).contains(&number) {
            Ok(Self(number))
        } else {
            Err(DashError::MonthInvalid {
                raw: number.to_string(),
            })
        }
    }

    /// Month of a UTC timestamp
    pub fn of(timestamp: &DateTime<Utc>) -> Self {
        Self(timestamp.month())
    }

    /// The month number, 1..=12
    pub fn number(self) -> u32 {
        self.0
    }

    /// All twelve months in calendar order
    pub fn all() -> impl Iterator<Item = Month> {
        (Self::MIN..=Self::MAX).map(Month)
    }
}

impl TryFrom<u32> for Month {
    type Error = DashError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Month::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl FromStr for Month {
    type Err = DashError;

    /// Parse a request value such as `"3"` or `" 12 "`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DashError::MonthMissing);
        }
        trimmed
            .parse::<u32>()
            .ok()
            .and_then(|n| Month::new(n).ok())
            .ok_or_else(|| DashError::MonthInvalid {
                raw: trimmed.to_string(),
            })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
