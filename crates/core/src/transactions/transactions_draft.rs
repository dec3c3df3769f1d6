//! Editable form state of a transaction.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::transactions_model::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
use crate::constants::{
    TRANSACTION_NAME_MAX_LEN, TRANSACTION_NAME_MIN_LEN, TRANSACTION_NOTE_MAX_LEN,
};
use crate::errors::{Error, Result, ValidationError};
use crate::forms::{Draft, ValidationContext};
use crate::models::{EntityId, RecordStatus};
use crate::utils::wire::parse_decimal_strict;

/// Raw form input; every field is kept as typed so it can be re-shown as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionDraft {
    pub transaction_type: TransactionType,
    pub name: String,
    pub date: String,
    pub category: String,
    pub amount: String,
    pub note: String,
    pub status: RecordStatus,
}

impl TransactionDraft {
    /// Empty draft for a new transaction of the given type.
    pub fn for_type(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            ..Self::default()
        }
    }

    /// Draft pre-populated from an existing transaction.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            transaction_type: tx.transaction_type,
            name: tx.name.clone(),
            date: tx
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            category: tx.category.clone(),
            amount: tx.amount.normalize().to_string(),
            note: tx.note.clone().unwrap_or_default(),
            status: tx.status,
        }
    }

    fn parsed_date(&self) -> Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")?)
    }

    fn parsed_amount(&self) -> Result<Decimal> {
        parse_decimal_strict(&self.amount).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Amount '{}' is not a number",
                self.amount
            )))
        })
    }

    /// Converts a validated draft into the add payload.
    pub fn to_new(&self) -> Result<NewTransaction> {
        Ok(NewTransaction {
            transaction_type: self.transaction_type,
            name: self.name.trim().to_string(),
            date: self.parsed_date()?,
            amount: self.parsed_amount()?,
            category: self.category.trim().to_string(),
            note: self.note.trim().to_string(),
            status: self.status,
        })
    }

    /// Converts a validated draft into the full-replace payload.
    pub fn to_update(&self, id: EntityId) -> Result<TransactionUpdate> {
        let new = self.to_new()?;
        Ok(TransactionUpdate {
            id,
            transaction_type: new.transaction_type,
            name: new.name,
            date: new.date,
            amount: new.amount,
            category: new.category,
            note: new.note,
            status: new.status,
        })
    }
}

impl Draft for TransactionDraft {
    const FIELDS: &'static [&'static str] = &["type", "name", "date", "category", "amount", "note"];

    fn validate_field(&self, field: &str, ctx: &ValidationContext) -> Option<String> {
        match field {
            "type" => match self.transaction_type {
                TransactionType::Unknown => Some("Type is required.".to_string()),
                _ => None,
            },
            "name" => {
                let len = self.name.chars().count();
                if self.name.trim().is_empty() {
                    Some("Name is required.".to_string())
                } else if !(TRANSACTION_NAME_MIN_LEN..=TRANSACTION_NAME_MAX_LEN).contains(&len) {
                    Some(format!(
                        "Name must be between {} and {} characters.",
                        TRANSACTION_NAME_MIN_LEN, TRANSACTION_NAME_MAX_LEN
                    ))
                } else {
                    None
                }
            }
            "date" => {
                if self.date.trim().is_empty() {
                    return Some("Date is required.".to_string());
                }
                match self.parsed_date() {
                    Err(_) => Some("Invalid date format.".to_string()),
                    Ok(date) if date > ctx.today => Some("Date cannot be in the future.".to_string()),
                    Ok(_) => None,
                }
            }
            "category" if self.category.trim().is_empty() => {
                Some("Category is required.".to_string())
            }
            "amount" => {
                if self.amount.trim().is_empty() {
                    return Some("Amount must be greater than 0.".to_string());
                }
                match parse_decimal_strict(&self.amount) {
                    None => Some("Amount must be a number.".to_string()),
                    Some(v) if v.is_zero() => Some("Amount must be greater than 0.".to_string()),
                    Some(v) if v.is_sign_negative() => Some("Amount cannot be negative.".to_string()),
                    Some(_) => None,
                }
            }
            "note" if self.note.chars().count() > TRANSACTION_NOTE_MAX_LEN => Some(format!(
                "Note cannot exceed {} characters.",
                TRANSACTION_NOTE_MAX_LEN
            )),
            _ => None,
        }
    }
}
