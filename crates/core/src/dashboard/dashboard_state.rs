use log::{debug, warn};

use super::dashboard_aggregation::{category_breakdown, chart_series, summarize};
use super::dashboard_model::{
    CategoryAmount, ChartPoint, DateRange, RangePreset, TransactionFilter, TransactionTotals,
    TypeFilter,
};
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionServiceTrait, TransactionType};

/// Identifies one list load; only the newest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Transaction list plus the dashboard's selection state.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    transactions: Vec<Transaction>,
    filter: TransactionFilter,
    show_inactive: bool,
    loading: bool,
    generation: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub fn show_inactive(&self) -> bool {
        self.show_inactive
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_type_filter(&mut self, type_filter: TypeFilter) {
        self.filter.type_filter = type_filter;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.filter.range = range;
    }

    pub fn apply_preset(&mut self, preset: RangePreset, today: chrono::NaiveDate) {
        self.filter.range = preset.resolve(today);
    }

    /// Switches between the active and the removed transactions.
    ///
    /// The caller reloads afterwards; any load still in flight is superseded.
    pub fn set_show_inactive(&mut self, show_inactive: bool) {
        if self.show_inactive != show_inactive {
            self.show_inactive = show_inactive;
            self.generation += 1;
            // The superseded load will be discarded on arrival.
            self.loading = false;
        }
    }

    /// Starts a load, superseding every earlier one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Applies the outcome of a load.
    ///
    /// Returns `Ok(false)` when the ticket is stale, in which case the outcome
    /// is dropped. A failed current load leaves the previous list in place.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<Transaction>>,
    ) -> Result<bool> {
        if ticket.0 != self.generation {
            debug!(
                "Discarding stale transaction load (ticket {}, current {})",
                ticket.0, self.generation
            );
            return Ok(false);
        }
        self.loading = false;
        match outcome {
            Ok(list) => {
                self.transactions = list;
                Ok(true)
            }
            Err(e) => {
                warn!("Keeping previous transaction list after failed load: {}", e);
                Err(e)
            }
        }
    }

    /// Reloads the list through the service.
    pub async fn reload(&mut self, service: &dyn TransactionServiceTrait) -> Result<bool> {
        let ticket = self.begin_load();
        let outcome = service.load_transactions(self.show_inactive).await;
        self.complete_load(ticket, outcome)
    }

    pub fn filtered(&self) -> Vec<Transaction> {
        self.filter.apply(&self.transactions)
    }

    pub fn totals(&self) -> TransactionTotals {
        summarize(&self.filtered())
    }

    pub fn chart(&self) -> Vec<ChartPoint> {
        chart_series(&self.totals())
    }

    pub fn breakdown(&self, transaction_type: TransactionType) -> Vec<CategoryAmount> {
        category_breakdown(&self.filtered(), transaction_type)
    }
}
