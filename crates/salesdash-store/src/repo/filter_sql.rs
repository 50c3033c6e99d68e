//! Compile filter expressions and group keys into SQL

use rusqlite::types::Value;
use salesdash_core::analytics::PRICE_RANGES;
use salesdash_core::ops::GroupKey;
use salesdash_core::Filter;

/// Render `filter` as a `WHERE` condition, appending bound values to `params`
///
/// Text search uses `instr` rather than `LIKE` so `%` and `_` stay literal;
/// SQLite's built-in `lower` only folds ASCII, matching the in-memory store.
pub(crate) fn compile(filter: &Filter, params: &mut Vec<Value>) -> String {
    match filter {
        Filter::MonthEq(month) => {
            params.push(Value::Integer(i64::from(month.number())));
            "month = ?".to_string()
        }
        Filter::TitleContains(needle) => {
            params.push(Value::Text(needle.clone()));
            "instr(lower(title), lower(?)) > 0".to_string()
        }
        Filter::DescriptionContains(needle) => {
            params.push(Value::Text(needle.clone()));
            "instr(lower(description), lower(?)) > 0".to_string()
        }
        Filter::PriceEq(price) => {
            params.push(Value::Real(*price));
            "price = ?".to_string()
        }
        Filter::Sold(sold) => {
            params.push(Value::Integer(i64::from(*sold)));
            "sold = ?".to_string()
        }
        Filter::And(children) => join(children, " AND ", "1", params),
        Filter::Or(children) => join(children, " OR ", "0", params),
    }
}

fn join(children: &[Filter], separator: &str, empty: &str, params: &mut Vec<Value>) -> String {
    if children.is_empty() {
        return empty.to_string();
    }
    let parts: Vec<String> = children.iter().map(|c| compile(c, params)).collect();
    format!("({})", parts.join(separator))
}

/// Column expression producing the group value for `key`
pub(crate) fn group_expr(key: GroupKey) -> String {
    match key {
        GroupKey::Category => "category".to_string(),
        GroupKey::Sold => "sold".to_string(),
        GroupKey::PriceRange => price_range_case(),
    }
}

/// `CASE` expression yielding the index into `PRICE_RANGES`
fn price_range_case() -> String {
    let arms: String = PRICE_RANGES
        .iter()
        .enumerate()
        .skip(1)
        .rev()
        .map(|(index, range)| format!(" WHEN price >= {} THEN {}", range.min, index))
        .collect();
    format!("CASE{} ELSE 0 END", arms)
}
