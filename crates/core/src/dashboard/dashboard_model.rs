//! Dashboard selection state and derived figures.

use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::TransactionType;
use crate::utils::time_utils::{first_day_of_month_back, last_day_of_month};

/// The All / Income / Expense toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Income,
    Expense,
}

impl TypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeFilter::All => "All",
            TypeFilter::Income => "Income",
            TypeFilter::Expense => "Expense",
        }
    }

    /// Case-insensitive equality against a transaction type; `All` accepts everything.
    pub fn accepts(&self, transaction_type: TransactionType) -> bool {
        match self {
            TypeFilter::All => true,
            other => other.as_str().eq_ignore_ascii_case(transaction_type.as_str()),
        }
    }
}

impl std::str::FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "income" => Ok(TypeFilter::Income),
            "expense" => Ok(TypeFilter::Expense),
            other => Err(format!("unknown type filter '{}'", other)),
        }
    }
}

/// A date range whose bounds are set independently.
///
/// The range only filters once both bounds are set; both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    pub fn any_time() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }
}

/// Named ranges offered next to the custom date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePreset {
    #[default]
    AnyTime,
    Today,
    Yesterday,
    /// The full Sunday-to-Saturday week before the current one.
    LastWeek,
    /// The previous calendar month.
    LastMonth,
    /// Six months back from today, through today.
    LastSixMonths,
    /// The previous calendar year.
    LastYear,
    Custom(DateRange),
}

impl RangePreset {
    /// Resolves the preset against the given date.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            RangePreset::AnyTime => DateRange::any_time(),
            RangePreset::Today => DateRange::between(today, today),
            RangePreset::Yesterday => match today.pred_opt() {
                Some(y) => DateRange::between(y, y),
                None => DateRange::any_time(),
            },
            RangePreset::LastWeek => {
                let since_sunday = u64::from(today.weekday().num_days_from_sunday());
                let start = today.checked_sub_days(Days::new(since_sunday + 7));
                let end = start.and_then(|s| s.checked_add_days(Days::new(6)));
                DateRange::new(start, end)
            }
            RangePreset::LastMonth => {
                let start = first_day_of_month_back(today, 1);
                let end = start.and_then(last_day_of_month);
                DateRange::new(start, end)
            }
            RangePreset::LastSixMonths => {
                DateRange::new(today.checked_sub_months(Months::new(6)), Some(today))
            }
            RangePreset::LastYear => {
                let year = today.year() - 1;
                DateRange::new(
                    NaiveDate::from_ymd_opt(year, 1, 1),
                    NaiveDate::from_ymd_opt(year, 12, 31),
                )
            }
            RangePreset::Custom(range) => *range,
        }
    }
}

impl std::str::FromStr for RangePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "anytime" => Ok(RangePreset::AnyTime),
            "today" => Ok(RangePreset::Today),
            "yesterday" => Ok(RangePreset::Yesterday),
            "lastweek" => Ok(RangePreset::LastWeek),
            "lastmonth" => Ok(RangePreset::LastMonth),
            "lastsixmonths" => Ok(RangePreset::LastSixMonths),
            "lastyear" => Ok(RangePreset::LastYear),
            other => Err(format!("unknown range preset '{}'", other)),
        }
    }
}

/// The three independent dashboard predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub type_filter: TypeFilter,
    pub range: DateRange,
    pub search: String,
}

impl TransactionFilter {
    pub fn with_type(mut self, type_filter: TypeFilter) -> Self {
        self.type_filter = type_filter;
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Income, expense and balance with their percentage shares.
///
/// Shares are relative to income + expense and rounded to one decimal; all
/// three are zero when there is nothing to divide by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    pub income_percent: Decimal,
    pub expense_percent: Decimal,
    pub balance_percent: Decimal,
}

impl TransactionTotals {
    /// Whether the balance card reads "Balance" (true) or "Lost".
    pub fn is_surplus(&self) -> bool {
        !self.balance_percent.is_sign_negative()
    }
}

/// One bar/slice of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
}

/// Sum of one category's amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Decimal,
}
