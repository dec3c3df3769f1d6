//! Fintrack Core - Domain entities, controllers, and traits.
//!
//! This crate contains the business logic of the personal finance client:
//! validation, the submit flow shared by every form, client-side filtering and
//! totals, and the traits describing the remote data-access layer. It is
//! transport-agnostic; the HTTP implementation lives in `fintrack-connect`.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod forms;
pub mod goals;
pub mod models;
pub mod session;
pub mod task_budget;
pub mod transactions;
pub mod users;
pub mod utils;
pub mod wishes;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
