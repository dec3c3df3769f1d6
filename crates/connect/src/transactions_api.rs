use async_trait::async_trait;
use chrono::NaiveDate;
use log::{info, warn};
use serde_json::{json, Value};

use fintrack_core::dashboard::DateRange;
use fintrack_core::errors::{ApiError, Result};
use fintrack_core::models::{EntityId, WireRecord};
use fintrack_core::transactions::{
    CategoryCatalog, CategoryTotal, DatedTotals, NewTransaction, PeriodTotals, Transaction,
    TransactionApiTrait, TransactionUpdate,
};

use crate::client::FintrackApiClient;
use crate::config::ShapePolicy;
use crate::envelope::decode_list;
use crate::transport::ApiRequest;

fn wire_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl FintrackApiClient {
    /// GET an aggregate endpoint with the optional period bounds.
    async fn get_aggregate(&self, path: &str, range: Option<&DateRange>) -> Result<Value> {
        let mut request = ApiRequest::get(path).query("userId", self.user_id()?);
        if let Some(range) = range {
            request = request
                .query_opt("startDate", range.start.map(wire_date))
                .query_opt("endDate", range.end.map(wire_date));
        }
        self.execute(request).await
    }
}

#[async_trait]
impl TransactionApiTrait for FintrackApiClient {
    async fn get_transactions(&self) -> Result<Vec<Transaction>> {
        let rows: Vec<Transaction> = self
            .get_list("/Transaction/GetAllTransactions", "userId", "GetAllTransactions")
            .await?;
        info!("[FintrackApi] Fetched {} transactions", rows.len());
        Ok(rows)
    }

    async fn get_inactive_transactions(&self) -> Result<Vec<Transaction>> {
        // This endpoint alone spells its query key `UserID`.
        let rows: Vec<Transaction> = self
            .get_list(
                "/Transaction/GetAllInactiveTransactions",
                "UserID",
                "GetAllInactiveTransactions",
            )
            .await?;
        info!("[FintrackApi] Fetched {} inactive transactions", rows.len());
        Ok(rows)
    }

    async fn add_transaction(&self, new_transaction: NewTransaction) -> Result<Value> {
        self.post("/Transaction/AddTransaction", &new_transaction)
            .await
    }

    async fn update_transaction(&self, transaction_update: TransactionUpdate) -> Result<Value> {
        self.post("/Transaction/UpdateTransaction", &transaction_update)
            .await
    }

    async fn remove_transaction(&self, transaction_id: EntityId) -> Result<Value> {
        self.post(
            "/Transaction/DeleteTransaction",
            &json!({ "TransactionID": transaction_id }),
        )
        .await
    }

    async fn get_categories(&self) -> Result<CategoryCatalog> {
        let body = self
            .get_aggregate("/Transaction/GetCategoryTotals", None)
            .await?;
        if !body.is_object() {
            return match self.config().shape_policy {
                ShapePolicy::Lenient => {
                    warn!("[FintrackApi] GetCategoryTotals: no category catalog in response");
                    Ok(CategoryCatalog::default())
                }
                ShapePolicy::Strict => Err(ApiError::UnexpectedShape(
                    "GetCategoryTotals: expected a category catalog object".to_string(),
                )
                .into()),
            };
        }
        Ok(CategoryCatalog::from_wire(body)?)
    }

    async fn get_category_totals(&self, range: &DateRange) -> Result<Vec<CategoryTotal>> {
        let body = self
            .get_aggregate("/Transaction/GetCategoryTotals", Some(range))
            .await?;
        decode_list(body, self.config().shape_policy, "GetCategoryTotals")
    }

    async fn get_income_expense_totals(&self, range: &DateRange) -> Result<PeriodTotals> {
        let request = ApiRequest::get("/Transaction/GetTotalIncomeExpense")
            .query("userId", self.user_id()?)
            .query_opt("startDate", range.start.map(wire_date))
            .query_opt("endDate", range.end.map(wire_date));
        let totals: Option<PeriodTotals> =
            self.get_one(request, "GetTotalIncomeExpense").await?;
        Ok(totals.unwrap_or_default())
    }

    async fn get_daily_totals(&self) -> Result<Vec<DatedTotals>> {
        self.get_list("/Transaction/GetDailyTotals", "userId", "GetDailyTotals")
            .await
    }

    async fn get_range_totals(&self, range: &DateRange) -> Result<Vec<DatedTotals>> {
        let body = self
            .get_aggregate("/Transaction/GetRangeTotals", Some(range))
            .await?;
        decode_list(body, self.config().shape_policy, "GetRangeTotals")
    }
}
