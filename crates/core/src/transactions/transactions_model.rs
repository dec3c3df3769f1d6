//! Transaction domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::constants::{DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_CATEGORIES};
use crate::models::{EntityId, RecordStatus, UserId, WireRecord};
use crate::utils::wire::{
    de_decimal, de_id, de_opt_date, de_opt_id, de_opt_string, de_string, Spellings,
};

/// Direction of a transaction.
///
/// Decoded case-insensitively; anything other than income or expense becomes
/// `Unknown`, which no type filter and no total ever includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionType {
    Income,
    Expense,
    #[default]
    Unknown,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
            TransactionType::Unknown => "Unknown",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "income" => TransactionType::Income,
            "expense" => TransactionType::Expense,
            _ => TransactionType::Unknown,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => TransactionType::parse(&s),
            _ => TransactionType::Unknown,
        })
    }
}

/// Domain model representing a transaction as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(
        rename = "TransactionID",
        alias = "transactionId",
        alias = "id",
        default,
        deserialize_with = "de_id"
    )]
    pub id: EntityId,
    #[serde(
        rename = "UserID",
        alias = "userId",
        default,
        deserialize_with = "de_opt_id"
    )]
    pub user_id: Option<UserId>,
    #[serde(rename = "Type", alias = "type", default)]
    pub transaction_type: TransactionType,
    #[serde(rename = "Name", alias = "name", default, deserialize_with = "de_string")]
    pub name: String,
    #[serde(rename = "Date", alias = "date", default, deserialize_with = "de_opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "Amount", alias = "amount", default, deserialize_with = "de_decimal")]
    pub amount: Decimal,
    #[serde(
        rename = "Category",
        alias = "category",
        default,
        deserialize_with = "de_string"
    )]
    pub category: String,
    #[serde(rename = "Note", alias = "note", default, deserialize_with = "de_opt_string")]
    pub note: Option<String>,
    #[serde(rename = "Status", alias = "status", default)]
    pub status: RecordStatus,
}

/// Input model for creating a new transaction
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct NewTransaction {
    #[serde(rename = "Type")]
    pub transaction_type: TransactionType,
    pub name: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub note: String,
    pub status: RecordStatus,
}

/// Input model for replacing an existing transaction
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionUpdate {
    #[serde(rename = "TransactionID")]
    pub id: EntityId,
    #[serde(rename = "Type")]
    pub transaction_type: TransactionType,
    pub name: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub note: String,
    pub status: RecordStatus,
}

/// Categories offered by the transaction form, per type.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CategoryCatalog {
    #[serde(default, alias = "Income", alias = "incomeCategories")]
    pub income: Vec<String>,
    #[serde(default, alias = "Expense", alias = "expenseCategories")]
    pub expense: Vec<String>,
}

impl CategoryCatalog {
    pub fn for_type(&self, transaction_type: TransactionType) -> &[String] {
        match transaction_type {
            TransactionType::Income => &self.income,
            TransactionType::Expense => &self.expense,
            TransactionType::Unknown => &[],
        }
    }

    /// Categories to offer in the form; the built-in list when the backend has none.
    pub fn options_for(&self, transaction_type: TransactionType) -> Vec<String> {
        let from_backend = self.for_type(transaction_type);
        if !from_backend.is_empty() {
            return from_backend.to_vec();
        }
        let defaults: &[&str] = match transaction_type {
            TransactionType::Income => &DEFAULT_INCOME_CATEGORIES,
            TransactionType::Expense => &DEFAULT_EXPENSE_CATEGORIES,
            TransactionType::Unknown => &[],
        };
        defaults.iter().map(|c| c.to_string()).collect()
    }
}

/// Backend-computed total of one category over a period.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryTotal {
    #[serde(
        rename = "Category",
        alias = "category",
        default,
        deserialize_with = "de_string"
    )]
    pub category: String,
    #[serde(rename = "Type", alias = "type", default)]
    pub transaction_type: TransactionType,
    #[serde(
        rename = "TotalAmount",
        alias = "Total",
        alias = "Amount",
        alias = "totalAmount",
        default,
        deserialize_with = "de_decimal"
    )]
    pub total: Decimal,
}

/// Backend-computed income and expense totals over a period.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PeriodTotals {
    #[serde(
        rename = "TotalIncome",
        alias = "totalIncome",
        default,
        deserialize_with = "de_decimal"
    )]
    pub income: Decimal,
    #[serde(
        rename = "TotalExpense",
        alias = "totalExpense",
        default,
        deserialize_with = "de_decimal"
    )]
    pub expense: Decimal,
}

impl PeriodTotals {
    pub fn balance(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Income and expense of one day (daily and range endpoints).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatedTotals {
    #[serde(rename = "Date", alias = "date", default, deserialize_with = "de_opt_date")]
    pub date: Option<NaiveDate>,
    #[serde(
        rename = "TotalIncome",
        alias = "Income",
        alias = "totalIncome",
        default,
        deserialize_with = "de_decimal"
    )]
    pub income: Decimal,
    #[serde(
        rename = "TotalExpense",
        alias = "Expense",
        alias = "totalExpense",
        default,
        deserialize_with = "de_decimal"
    )]
    pub expense: Decimal,
}

impl WireRecord for Transaction {
    const SPELLINGS: Spellings = &[
        &["TransactionID", "transactionId", "id"],
        &["UserID", "userId"],
        &["Type", "type"],
        &["Name", "name"],
        &["Date", "date"],
        &["Amount", "amount"],
        &["Category", "category"],
        &["Note", "note"],
        &["Status", "status"],
    ];
}

impl WireRecord for CategoryCatalog {
    const SPELLINGS: Spellings = &[
        &["income", "Income", "incomeCategories"],
        &["expense", "Expense", "expenseCategories"],
    ];
}

impl WireRecord for CategoryTotal {
    const SPELLINGS: Spellings = &[
        &["Category", "category"],
        &["Type", "type"],
        &["TotalAmount", "Total", "Amount", "totalAmount"],
    ];
}

impl WireRecord for PeriodTotals {
    const SPELLINGS: Spellings = &[
        &["TotalIncome", "totalIncome"],
        &["TotalExpense", "totalExpense"],
    ];
}

impl WireRecord for DatedTotals {
    const SPELLINGS: Spellings = &[
        &["Date", "date"],
        &["TotalIncome", "Income", "totalIncome"],
        &["TotalExpense", "Expense", "totalExpense"],
    ];
}
