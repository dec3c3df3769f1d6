//! Tolerant decoding helpers for backend payloads.
//!
//! The backend is loose about types: amounts arrive as numbers or strings
//! (sometimes with a comma decimal separator), identifiers as numbers or
//! numeric strings, dates as plain dates or date-times, and any of them may be
//! `null`. These helpers are used through `#[serde(deserialize_with = ..)]`.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::time_utils::parse_flexible_date;

/// Parses an amount, falling back to zero for anything non-numeric.
pub fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    let normalized = value_str.trim().replace(',', ".");
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(&normalized) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(&normalized) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::warn!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Strict amount parse used by form validation; `None` when not a number.
pub fn parse_decimal_strict(value_str: &str) -> Option<Decimal> {
    let normalized = value_str.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

fn decimal_from_value(value: &Value, field_name: &str) -> Option<Decimal> {
    match value {
        Value::Number(n) => Some(parse_decimal_tolerant(&n.to_string(), field_name)),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(parse_decimal_tolerant(s, field_name)),
        _ => None,
    }
}

/// Decimal that defaults to zero when missing, null or non-numeric.
pub fn de_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| decimal_from_value(v, "amount"))
        .unwrap_or(Decimal::ZERO))
}

/// Optional decimal; null and empty strings decode to `None`.
pub fn de_opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| decimal_from_value(v, "amount")))
}

/// Optional calendar date from a date or date-time string.
pub fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => {
            let parsed = parse_flexible_date(&s);
            if parsed.is_none() && !s.trim().is_empty() {
                log::warn!("Ignoring unparseable date '{}'", s);
            }
            parsed
        }
        _ => None,
    })
}

fn id_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Identifier from a number or a numeric string; missing decodes to 0.
pub fn de_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value).unwrap_or_default())
}

/// Optional identifier from a number or a numeric string.
pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value))
}

/// String that decodes `null` as empty and trims surrounding whitespace.
pub fn de_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Optional string; null and blank decode to `None`.
pub fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = de_string(deserializer)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// Key groups of one record: the primary spelling first, then the aliases.
pub type Spellings = &'static [&'static [&'static str]];

/// Moves every spelling group of `row` onto its primary key.
///
/// The first non-null value in group order wins; the other spellings are
/// dropped so a row carrying two of them still decodes.
pub fn collapse_spellings(row: &mut Map<String, Value>, spellings: Spellings) {
    for group in spellings {
        let Some(primary) = group.first() else {
            continue;
        };
        let mut chosen: Option<Value> = None;
        for key in group.iter() {
            if let Some(value) = row.remove(*key) {
                if chosen.as_ref().map_or(true, Value::is_null) {
                    chosen = Some(value);
                }
            }
        }
        if let Some(value) = chosen {
            row.insert((*primary).to_string(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "de_decimal")]
        amount: Decimal,
        #[serde(default, deserialize_with = "de_opt_decimal")]
        budget: Option<Decimal>,
        #[serde(default, deserialize_with = "de_id")]
        id: i64,
        #[serde(default, deserialize_with = "de_opt_date")]
        date: Option<NaiveDate>,
        #[serde(default, deserialize_with = "de_opt_string")]
        note: Option<String>,
    }

    #[test]
    fn test_amounts_decode_from_numbers_and_strings() {
        let p: Probe = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(p.amount, dec!(12.5));

        let p: Probe = serde_json::from_str(r#"{"amount": "12,75"}"#).unwrap();
        assert_eq!(p.amount, dec!(12.75));

        let p: Probe = serde_json::from_str(r#"{"amount": "abc"}"#).unwrap();
        assert_eq!(p.amount, Decimal::ZERO);

        let p: Probe = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(p.amount, Decimal::ZERO);

        let p: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.amount, Decimal::ZERO);
        assert_eq!(p.budget, None);
    }

    #[test]
    fn test_ids_dates_and_strings() {
        let p: Probe = serde_json::from_str(
            r#"{"id": "42", "date": "2024-02-03T00:00:00", "note": "  ", "budget": ""}"#,
        )
        .unwrap();
        assert_eq!(p.id, 42);
        assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 2, 3));
        assert_eq!(p.note, None);
        assert_eq!(p.budget, None);
    }

    #[test]
    fn test_collapse_spellings_keeps_first_non_null() {
        const SPELLINGS: Spellings = &[&["TransactionID", "id"], &["Note", "note"], &["Name"]];
        let mut row = serde_json::json!({
            "TransactionID": null,
            "id": 7,
            "Note": "rent",
            "note": "ignored",
            "Name": "Flat",
            "Extra": true
        });
        let map = row.as_object_mut().unwrap();
        collapse_spellings(map, SPELLINGS);

        assert_eq!(
            row,
            serde_json::json!({ "TransactionID": 7, "Note": "rent", "Name": "Flat", "Extra": true })
        );
    }

    #[test]
    fn test_parse_decimal_strict() {
        assert_eq!(parse_decimal_strict("0.01"), Some(dec!(0.01)));
        assert_eq!(parse_decimal_strict("-3"), Some(dec!(-3)));
        assert_eq!(parse_decimal_strict("ten"), None);
        assert_eq!(parse_decimal_strict("  "), None);
    }
}
