//! Decoding of the backend's list envelopes.
//!
//! List endpoints answer with a bare array, or with an object holding the rows
//! under `ResultSet` (an array, or a single object for one row) or `data`.
//! Anything else is a shape mismatch, handled per [`ShapePolicy`].

use log::warn;
use rust_decimal::Decimal;
use serde_json::Value;

use fintrack_core::errors::{ApiError, Error, Result};
use fintrack_core::models::WireRecord;
use fintrack_core::utils::wire::parse_decimal_tolerant;
use fintrack_core::wishes::{Wish, WishListing};

use crate::config::ShapePolicy;

const LIST_KEYS: [&str; 2] = ["ResultSet", "data"];
const WISH_TOTAL_KEYS: [&str; 4] = [
    "TotalEstimatedCost",
    "totalEstimatedCost",
    "totalCost",
    "TotalCost",
];

fn shape_mismatch(policy: ShapePolicy, context: &str, body: &Value) -> Result<Vec<Value>> {
    let kind = match body {
        Value::Object(_) => "object without a list field",
        Value::Null => "null",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Array(_) => "array",
    };
    match policy {
        ShapePolicy::Lenient => {
            warn!(
                "[FintrackApi] {}: unexpected response shape ({}), treating as empty list",
                context, kind
            );
            Ok(Vec::new())
        }
        ShapePolicy::Strict => {
            Err(ApiError::UnexpectedShape(format!("{}: got {}", context, kind)).into())
        }
    }
}

fn decode_value<T: WireRecord>(value: Value, context: &str) -> Result<T> {
    T::from_wire(value)
        .map_err(|e| Error::Api(ApiError::Decode(format!("{}: {}", context, e))))
}

/// Raw rows of a list response.
pub fn list_values(body: Value, policy: ShapePolicy, context: &str) -> Result<Vec<Value>> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            for key in LIST_KEYS {
                match map.remove(key) {
                    Some(Value::Array(items)) => return Ok(items),
                    Some(Value::Null) => return Ok(Vec::new()),
                    Some(single @ Value::Object(_)) => return Ok(vec![single]),
                    Some(_) | None => continue,
                }
            }
            shape_mismatch(policy, context, &Value::Object(map))
        }
        other => shape_mismatch(policy, context, &other),
    }
}

/// Typed rows of a list response. A row that does not decode fails the call.
pub fn decode_list<T: WireRecord>(
    body: Value,
    policy: ShapePolicy,
    context: &str,
) -> Result<Vec<T>> {
    list_values(body, policy, context)?
        .into_iter()
        .map(|item| decode_value(item, context))
        .collect()
}

/// A single record, either enveloped or bare. `None` when the backend sent nothing.
pub fn decode_one<T: WireRecord>(
    body: Value,
    policy: ShapePolicy,
    context: &str,
) -> Result<Option<T>> {
    let has_envelope = body
        .as_object()
        .is_some_and(|map| LIST_KEYS.iter().any(|k| map.contains_key(*k)));
    let record = match body {
        Value::Null => None,
        Value::Object(_) if !has_envelope => Some(body),
        other => list_values(other, policy, context)?.into_iter().next(),
    };
    record.map(|value| decode_value(value, context)).transpose()
}

/// The server-computed wish total, under whichever key the backend used.
pub fn wish_total(body: &Value) -> Option<Decimal> {
    let map = body.as_object()?;
    WISH_TOTAL_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => Some(parse_decimal_tolerant(&n.to_string(), "wish total")),
            Value::String(s) => Some(parse_decimal_tolerant(s, "wish total")),
            _ => None,
        })
}

pub fn decode_wish_listing(body: Value, policy: ShapePolicy) -> Result<WishListing> {
    let reported_total = wish_total(&body);
    let wishes: Vec<Wish> = decode_list(body, policy, "GetAllWishes")?;
    Ok(WishListing {
        wishes,
        reported_total,
    })
}
