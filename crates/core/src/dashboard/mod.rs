//! Dashboard module - filtering, selection state and client-side totals.

mod dashboard_aggregation;
mod dashboard_filters;
mod dashboard_model;
mod dashboard_state;

#[cfg(test)]
mod dashboard_tests;

pub use dashboard_aggregation::{category_breakdown, chart_series, summarize};
pub use dashboard_filters::{matches_range, matches_search, matches_type};
pub use dashboard_model::{
    CategoryAmount, ChartPoint, DateRange, RangePreset, TransactionFilter, TransactionTotals,
    TypeFilter,
};
pub use dashboard_state::{DashboardState, LoadTicket};
