//! fintrack Connect - HTTP data access for the fintrack backend.
//!
//! This crate implements the per-resource API traits of `fintrack-core`
//! against the REST backend, and provides a file-backed session store.

pub mod client;
pub mod config;
pub mod envelope;
mod goals_api;
pub mod session_file;
mod task_budget_api;
mod transactions_api;
pub mod transport;
mod users_api;
mod wishes_api;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use client::FintrackApiClient;
pub use config::{
    ApiConfig, ShapePolicy, DEFAULT_API_URL, DEFAULT_LOGIN_SUCCESS_CODE, DEFAULT_TIMEOUT_SECS,
};
pub use session_file::FileSessionStore;
pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, ReqwestTransport};
