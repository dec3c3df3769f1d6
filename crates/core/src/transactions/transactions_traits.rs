use async_trait::async_trait;
use serde_json::Value;

use super::transactions_draft::TransactionDraft;
use super::transactions_model::{
    CategoryCatalog, CategoryTotal, DatedTotals, NewTransaction, PeriodTotals, Transaction,
    TransactionUpdate,
};
use crate::dashboard::DateRange;
use crate::errors::Result;
use crate::forms::{FormState, ValidationContext};
use crate::models::EntityId;

/// Remote operations on the `/Transaction` resource.
///
/// Each method performs exactly one request for the session's user.
#[async_trait]
pub trait TransactionApiTrait: Send + Sync {
    async fn get_transactions(&self) -> Result<Vec<Transaction>>;
    async fn get_inactive_transactions(&self) -> Result<Vec<Transaction>>;
    async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Value>;
    async fn update_transaction(&self, transaction_update: TransactionUpdate) -> Result<Value>;
    async fn remove_transaction(&self, transaction_id: EntityId) -> Result<Value>;
    async fn get_categories(&self) -> Result<CategoryCatalog>;
    async fn get_category_totals(&self, range: &DateRange) -> Result<Vec<CategoryTotal>>;
    async fn get_income_expense_totals(&self, range: &DateRange) -> Result<PeriodTotals>;
    async fn get_daily_totals(&self) -> Result<Vec<DatedTotals>>;
    async fn get_range_totals(&self, range: &DateRange) -> Result<Vec<DatedTotals>>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Active transactions, or the removed ones when `show_inactive` is set.
    async fn load_transactions(&self, show_inactive: bool) -> Result<Vec<Transaction>>;

    /// Submits an add/edit form; exactly one backend write on success.
    async fn save_transaction(
        &self,
        form: &mut FormState<TransactionDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value>;

    async fn remove_transaction(&self, transaction_id: EntityId) -> Result<Value>;

    /// Category catalog for the form; empty on failure.
    async fn load_categories(&self) -> CategoryCatalog;

    async fn category_totals(&self, range: &DateRange) -> Result<Vec<CategoryTotal>>;
    async fn income_expense_totals(&self, range: &DateRange) -> Result<PeriodTotals>;
    async fn daily_totals(&self) -> Result<Vec<DatedTotals>>;
    async fn range_totals(&self, range: &DateRange) -> Result<Vec<DatedTotals>>;
}
