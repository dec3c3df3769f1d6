//! Transaction predicates.
//!
//! Each predicate is independent of the others, so the order in which they
//! are applied never changes the result.

use super::dashboard_model::{DateRange, TransactionFilter, TypeFilter};
use crate::transactions::Transaction;

pub fn matches_type(tx: &Transaction, type_filter: TypeFilter) -> bool {
    type_filter.accepts(tx.transaction_type)
}

/// Inclusive range test. An inactive range accepts everything; an active one
/// rejects transactions whose date could not be decoded.
pub fn matches_range(tx: &Transaction, range: &DateRange) -> bool {
    if !range.is_active() {
        return true;
    }
    tx.date.is_some_and(|date| range.contains(date))
}

/// Case-insensitive substring search over name, category, note, type and status.
pub fn matches_search(tx: &Transaction, search: &str) -> bool {
    if search.trim().is_empty() {
        return true;
    }
    let term = search.to_lowercase();
    let fields = [
        tx.name.as_str(),
        tx.category.as_str(),
        tx.note.as_deref().unwrap_or(""),
        tx.transaction_type.as_str(),
        tx.status.as_str(),
    ];
    fields.iter().any(|f| f.to_lowercase().contains(&term))
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        matches_type(tx, self.type_filter)
            && matches_range(tx, &self.range)
            && matches_search(tx, &self.search)
    }

    /// Transactions passing every active predicate, in their original order.
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|tx| self.matches(tx))
            .cloned()
            .collect()
    }
}
