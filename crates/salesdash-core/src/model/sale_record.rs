use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::month::Month;

/// One entry of the product/transaction feed
///
/// Records are immutable once seeded; the whole collection is replaced on
/// reseed. The JSON form matches the feed (`dateOfSale`, camelCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Identifier from the source feed (not unique across reseeds)
    pub id: i64,

    #[serde(default, deserialize_with = "nullable_text")]
    pub title: String,

    /// Sale price; the feed may send an integer, a decimal or a numeric string
    #[serde(deserialize_with = "flexible_price")]
    pub price: f64,

    #[serde(default, deserialize_with = "nullable_text")]
    pub description: String,

    /// Free-form label; `null` becomes the empty category
    #[serde(default, deserialize_with = "nullable_text")]
    pub category: String,

    /// Display-only image URL
    #[serde(default, deserialize_with = "nullable_text")]
    pub image: String,

    pub sold: bool,

    /// Sale timestamp, normalized to UTC
    pub date_of_sale: DateTime<Utc>,
}

impl SaleRecord {
    /// Calendar month of the sale (UTC)
    pub fn month(&self) -> Month {
        Month::of(&self.date_of_sale)
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Number(f64),
    Text(String),
}

fn flexible_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match PriceRepr::deserialize(deserializer)? {
        PriceRepr::Number(n) => Ok(n),
        PriceRepr::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("price '{}' is not a number", s))
        }),
    }
}
