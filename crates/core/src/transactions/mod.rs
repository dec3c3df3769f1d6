//! Transactions module - income/expense records, their form and services.

mod transactions_draft;
mod transactions_model;
mod transactions_service;
mod transactions_traits;

#[cfg(test)]
mod transactions_service_tests;

pub use transactions_draft::TransactionDraft;
pub use transactions_model::{
    CategoryCatalog, CategoryTotal, DatedTotals, NewTransaction, PeriodTotals, Transaction,
    TransactionType, TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionApiTrait, TransactionServiceTrait};
