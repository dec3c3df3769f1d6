//! Field rules shared by the entity drafts.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::{Error, Result, ValidationError};
use crate::utils::wire::parse_decimal_strict;

/// `"{label} is required."` when the value is blank.
pub fn required(value: &str, label: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(format!("{} is required.", label))
    } else {
        None
    }
}

/// Required amount that may be zero but not negative.
pub fn non_negative_amount(raw: &str, label: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return Some(format!("{} is required.", label));
    }
    match parse_decimal_strict(raw) {
        None => Some(format!("{} must be a number.", label)),
        Some(v) if v.is_sign_negative() && !v.is_zero() => {
            Some(format!("{} cannot be negative.", label))
        }
        Some(_) => None,
    }
}

/// Required amount that must be strictly positive.
pub fn positive_amount(raw: &str, label: &str) -> Option<String> {
    non_negative_amount(raw, label).or_else(|| match parse_decimal_strict(raw) {
        Some(v) if v.is_zero() => Some(format!("{} must be greater than 0.", label)),
        _ => None,
    })
}

/// Required `YYYY-MM-DD` date.
pub fn required_date(raw: &str, label: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return Some(format!("{} is required.", label));
    }
    match parse_form_date(raw) {
        Ok(_) => None,
        Err(_) => Some("Invalid date format.".to_string()),
    }
}

pub fn parse_form_date(raw: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
}

/// Amount of a draft that already passed validation.
pub fn parse_form_amount(raw: &str, label: &str) -> Result<Decimal> {
    parse_decimal_strict(raw).ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "{} '{}' is not a number",
            label, raw
        )))
    })
}

/// Optional amount: blank is `None`, otherwise it must parse.
pub fn parse_optional_amount(raw: &str, label: &str) -> Result<Option<Decimal>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_form_amount(raw, label).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_rules() {
        assert_eq!(non_negative_amount("0", "Cost"), None);
        assert_eq!(
            non_negative_amount("-1", "Cost").as_deref(),
            Some("Cost cannot be negative.")
        );
        assert_eq!(
            non_negative_amount("abc", "Cost").as_deref(),
            Some("Cost must be a number.")
        );
        assert_eq!(
            positive_amount("0", "Target amount").as_deref(),
            Some("Target amount must be greater than 0.")
        );
        assert_eq!(positive_amount("0.01", "Target amount"), None);
    }

    #[test]
    fn test_date_rules() {
        assert_eq!(required_date("2024-02-29", "Start date"), None);
        assert_eq!(
            required_date("2023-02-29", "Start date").as_deref(),
            Some("Invalid date format.")
        );
        assert_eq!(
            required_date(" ", "Start date").as_deref(),
            Some("Start date is required.")
        );
    }
}
