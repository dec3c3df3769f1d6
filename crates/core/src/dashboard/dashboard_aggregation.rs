use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use super::dashboard_model::{CategoryAmount, ChartPoint, TransactionTotals};
use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::transactions::{Transaction, TransactionType};

fn sum_of_type(transactions: &[Transaction], transaction_type: TransactionType) -> Decimal {
    transactions
        .iter()
        .filter(|tx| tx.transaction_type == transaction_type)
        .map(|tx| tx.amount)
        .sum()
}

fn share(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (part / total * Decimal::ONE_HUNDRED).round_dp_with_strategy(
        PERCENT_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Totals and percentage shares of an (already filtered) transaction list.
pub fn summarize(transactions: &[Transaction]) -> TransactionTotals {
    let income = sum_of_type(transactions, TransactionType::Income);
    let expense = sum_of_type(transactions, TransactionType::Expense);
    let balance = income - expense;
    let total = income + expense;

    TransactionTotals {
        income,
        expense,
        balance,
        income_percent: share(income, total),
        expense_percent: share(expense, total),
        balance_percent: share(balance, total),
    }
}

/// Income / Expense / Balance series for the overview chart.
pub fn chart_series(totals: &TransactionTotals) -> Vec<ChartPoint> {
    vec![
        ChartPoint {
            label: "Income".to_string(),
            value: totals.income,
        },
        ChartPoint {
            label: "Expense".to_string(),
            value: totals.expense,
        },
        ChartPoint {
            label: "Balance".to_string(),
            value: totals.balance,
        },
    ]
}

/// Per-category sums of one transaction type, largest first.
pub fn category_breakdown(
    transactions: &[Transaction],
    transaction_type: TransactionType,
) -> Vec<CategoryAmount> {
    let mut by_category: HashMap<String, Decimal> = HashMap::new();
    for tx in transactions
        .iter()
        .filter(|tx| tx.transaction_type == transaction_type)
    {
        let key = if tx.category.is_empty() {
            "Uncategorized".to_string()
        } else {
            tx.category.clone()
        };
        *by_category.entry(key).or_insert(Decimal::ZERO) += tx.amount;
    }

    let mut breakdown: Vec<CategoryAmount> = by_category
        .into_iter()
        .map(|(category, amount)| CategoryAmount { category, amount })
        .collect();
    breakdown.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });
    breakdown
}
