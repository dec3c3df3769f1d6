use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use serde_json::Value;

use super::transactions_draft::TransactionDraft;
use super::transactions_model::{
    CategoryCatalog, CategoryTotal, DatedTotals, PeriodTotals, Transaction,
};
use super::transactions_traits::{TransactionApiTrait, TransactionServiceTrait};
use crate::dashboard::DateRange;
use crate::errors::Result;
use crate::forms::{
    run_action, submit_form, FormMode, FormState, Notification, Notifier, SubmitMessages,
    ValidationContext,
};
use crate::models::{EntityId, RecordStatus};

const ADD_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Transaction added successfully!",
    failure: "Failed to add transaction!",
};

const UPDATE_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Transaction updated!",
    failure: "Failed to update transaction!",
};

const REMOVE_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Successfully deleted the transaction!",
    failure: "Deletion failed!",
};

/// Controller for the transaction list and its add/edit dialog.
pub struct TransactionService {
    api: Arc<dyn TransactionApiTrait>,
    notifier: Arc<dyn Notifier>,
}

impl TransactionService {
    pub fn new(api: Arc<dyn TransactionApiTrait>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn load_transactions(&self, show_inactive: bool) -> Result<Vec<Transaction>> {
        let result = if show_inactive {
            self.api.get_inactive_transactions().await.map(|list| {
                // The inactive endpoint does not always echo the status.
                list.into_iter()
                    .map(|mut tx| {
                        tx.status = RecordStatus::Inactive;
                        tx
                    })
                    .collect::<Vec<_>>()
            })
        } else {
            self.api.get_transactions().await
        };

        match result {
            Ok(list) => {
                debug!("Loaded {} transactions (inactive: {})", list.len(), show_inactive);
                Ok(list)
            }
            Err(e) => {
                error!("Failed to load transactions: {}", e);
                self.notifier.notify(Notification::Error(
                    "Failed to load transactions.".to_string(),
                ));
                Err(e)
            }
        }
    }

    async fn save_transaction(
        &self,
        form: &mut FormState<TransactionDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value> {
        let messages = match form.mode() {
            FormMode::Create => ADD_MESSAGES,
            FormMode::Edit(_) => UPDATE_MESSAGES,
        };
        let api = self.api.clone();
        submit_form(
            form,
            ctx,
            self.notifier.as_ref(),
            messages,
            |mode, draft| async move {
                match mode {
                    FormMode::Create => api.add_transaction(draft.to_new()?).await,
                    FormMode::Edit(id) => api.update_transaction(draft.to_update(id)?).await,
                }
            },
        )
        .await
    }

    async fn remove_transaction(&self, transaction_id: EntityId) -> Result<Value> {
        run_action(
            self.notifier.as_ref(),
            REMOVE_MESSAGES,
            self.api.remove_transaction(transaction_id),
        )
        .await
    }

    async fn load_categories(&self) -> CategoryCatalog {
        match self.api.get_categories().await {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("Error loading categories: {}", e);
                self.notifier.notify(Notification::Error(
                    "Failed to load categories.".to_string(),
                ));
                CategoryCatalog::default()
            }
        }
    }

    async fn category_totals(&self, range: &DateRange) -> Result<Vec<CategoryTotal>> {
        self.api.get_category_totals(range).await
    }

    async fn income_expense_totals(&self, range: &DateRange) -> Result<PeriodTotals> {
        self.api.get_income_expense_totals(range).await
    }

    async fn daily_totals(&self) -> Result<Vec<DatedTotals>> {
        self.api.get_daily_totals().await
    }

    async fn range_totals(&self, range: &DateRange) -> Result<Vec<DatedTotals>> {
        self.api.get_range_totals(range).await
    }
}
