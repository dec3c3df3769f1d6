#[cfg(test)]
mod tests {
    use crate::dashboard::DateRange;
    use crate::errors::{ApiError, Error, Result};
    use crate::forms::testing::RecordingNotifier;
    use crate::forms::{FormState, Notification, ValidationContext, CORRECT_ERRORS_MESSAGE};
    use crate::models::{EntityId, RecordStatus};
    use crate::transactions::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    // --- Mock backend ---
    #[derive(Clone, Default)]
    struct MockTransactionApi {
        rows: Arc<Mutex<Vec<Transaction>>>,
        writes: Arc<Mutex<usize>>,
        fail_writes: bool,
        fail_categories: bool,
    }

    impl MockTransactionApi {
        fn new() -> Self {
            Self::default()
        }

        fn failing() -> Self {
            Self {
                fail_writes: true,
                fail_categories: true,
                ..Self::default()
            }
        }

        fn write_count(&self) -> usize {
            *self.writes.lock().unwrap()
        }

        fn record_write(&self) -> Result<()> {
            *self.writes.lock().unwrap() += 1;
            if self.fail_writes {
                return Err(Error::Api(ApiError::Status {
                    status: 500,
                    body: "boom".to_string(),
                }));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TransactionApiTrait for MockTransactionApi {
        async fn get_transactions(&self) -> Result<Vec<Transaction>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|t| t.status.is_active()).cloned().collect())
        }

        async fn get_inactive_transactions(&self) -> Result<Vec<Transaction>> {
            // Mirrors a backend that omits Status on this endpoint.
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .filter(|t| !t.status.is_active())
                .cloned()
                .map(|mut t| {
                    t.status = RecordStatus::Active;
                    t
                })
                .collect())
        }

        async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Value> {
            self.record_write()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as EntityId + 1;
            rows.push(Transaction {
                id,
                user_id: Some(1),
                transaction_type: new_transaction.transaction_type,
                name: new_transaction.name,
                date: Some(new_transaction.date),
                amount: new_transaction.amount,
                category: new_transaction.category,
                note: Some(new_transaction.note),
                status: new_transaction.status,
            });
            Ok(json!({ "TransactionID": id }))
        }

        async fn update_transaction(&self, update: TransactionUpdate) -> Result<Value> {
            self.record_write()?;
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|t| t.id == update.id)
                .ok_or_else(|| Error::Unexpected("Transaction not found".to_string()))?;
            row.name = update.name;
            row.amount = update.amount;
            row.category = update.category;
            Ok(json!({ "StatusCode": 200 }))
        }

        async fn remove_transaction(&self, transaction_id: EntityId) -> Result<Value> {
            self.record_write()?;
            let mut rows = self.rows.lock().unwrap();
            if let Some(row) = rows.iter_mut().find(|t| t.id == transaction_id) {
                row.status = RecordStatus::Inactive;
            }
            Ok(json!({ "StatusCode": 200 }))
        }

        async fn get_categories(&self) -> Result<CategoryCatalog> {
            if self.fail_categories {
                return Err(Error::Api(ApiError::Transport("offline".to_string())));
            }
            Ok(CategoryCatalog {
                income: vec!["Salary".to_string()],
                expense: vec!["Food".to_string()],
            })
        }

        async fn get_category_totals(&self, _range: &DateRange) -> Result<Vec<CategoryTotal>> {
            unimplemented!()
        }

        async fn get_income_expense_totals(&self, _range: &DateRange) -> Result<PeriodTotals> {
            Ok(PeriodTotals {
                income: dec!(10),
                expense: dec!(4),
            })
        }

        async fn get_daily_totals(&self) -> Result<Vec<DatedTotals>> {
            unimplemented!()
        }

        async fn get_range_totals(&self, _range: &DateRange) -> Result<Vec<DatedTotals>> {
            unimplemented!()
        }
    }

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
    }

    fn lunch_draft(amount: &str) -> TransactionDraft {
        TransactionDraft {
            name: "Lunch".to_string(),
            date: "2024-06-01".to_string(),
            category: "Food".to_string(),
            amount: amount.to_string(),
            ..TransactionDraft::for_type(TransactionType::Expense)
        }
    }

    fn service(api: &MockTransactionApi, notifier: &RecordingNotifier) -> TransactionService {
        TransactionService::new(Arc::new(api.clone()), Arc::new(notifier.clone()))
    }

    #[tokio::test]
    async fn test_submit_then_reload_contains_new_transaction() {
        let api = MockTransactionApi::new();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        let mut form = FormState::create(lunch_draft("12.50"));
        service.save_transaction(&mut form, &ctx()).await.unwrap();

        assert!(!form.is_open());
        assert_eq!(
            notifier.last(),
            Some(Notification::Success("Transaction added successfully!".to_string()))
        );

        let list = service.load_transactions(false).await.unwrap();
        assert_eq!(list.len(), 1);
        let tx = &list[0];
        assert_eq!(tx.name, "Lunch");
        assert_eq!(tx.amount, dec!(12.50));
        assert_eq!(tx.category, "Food");
        assert_eq!(tx.transaction_type, TransactionType::Expense);
        assert_eq!(tx.date, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[tokio::test]
    async fn test_zero_amount_is_blocked_and_cent_is_accepted() {
        let api = MockTransactionApi::new();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        let mut form = FormState::create(lunch_draft("0"));
        let err = service.save_transaction(&mut form, &ctx()).await.unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|f| f.get("amount")),
            Some("Amount must be greater than 0.")
        );
        assert_eq!(
            notifier.last(),
            Some(Notification::Error(CORRECT_ERRORS_MESSAGE.to_string()))
        );
        assert_eq!(api.write_count(), 0);

        let mut form = FormState::create(lunch_draft("0.01"));
        service.save_transaction(&mut form, &ctx()).await.unwrap();
        assert_eq!(api.write_count(), 1);
    }

    #[tokio::test]
    async fn test_edit_replaces_existing_record() {
        let api = MockTransactionApi::new();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        let mut form = FormState::create(lunch_draft("5"));
        service.save_transaction(&mut form, &ctx()).await.unwrap();
        let existing = service.load_transactions(false).await.unwrap().remove(0);

        let mut draft = TransactionDraft::from_transaction(&existing);
        draft.amount = "7.25".to_string();
        let mut form = FormState::edit(existing.id, draft, TransactionDraft::default());
        service.save_transaction(&mut form, &ctx()).await.unwrap();

        let list = service.load_transactions(false).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].amount, dec!(7.25));
        assert_eq!(
            notifier.last(),
            Some(Notification::Success("Transaction updated!".to_string()))
        );
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_form_open_with_draft() {
        let api = MockTransactionApi::failing();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        let mut form = FormState::create(lunch_draft("3"));
        let err = service.save_transaction(&mut form, &ctx()).await.unwrap_err();

        assert_eq!(err.to_string(), "Backend request failed: API error 500: boom");
        assert!(form.is_open());
        assert!(!form.is_pending());
        assert_eq!(form.draft().amount, "3");
        assert_eq!(
            notifier.last(),
            Some(Notification::Error("Failed to add transaction!".to_string()))
        );
    }

    #[tokio::test]
    async fn test_removed_transaction_shows_in_inactive_view() {
        let api = MockTransactionApi::new();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        let mut form = FormState::create(lunch_draft("9"));
        service.save_transaction(&mut form, &ctx()).await.unwrap();
        service.remove_transaction(1).await.unwrap();

        assert!(service.load_transactions(false).await.unwrap().is_empty());
        let inactive = service.load_transactions(true).await.unwrap();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].status, RecordStatus::Inactive);
        assert_eq!(
            notifier.last(),
            Some(Notification::Success(
                "Successfully deleted the transaction!".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_category_failure_degrades_to_empty_catalog() {
        let api = MockTransactionApi::failing();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        let catalog = service.load_categories().await;
        assert_eq!(catalog, CategoryCatalog::default());
        assert_eq!(
            notifier.all(),
            vec![Notification::Error("Failed to load categories.".to_string())]
        );
    }

    #[tokio::test]
    async fn test_period_totals_pass_through() {
        let api = MockTransactionApi::new();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        let totals = service
            .income_expense_totals(&DateRange::any_time())
            .await
            .unwrap();
        assert_eq!(totals.balance(), dec!(6));
    }
}
