//! Goals module - domain models, services, and traits.

mod goals_draft;
mod goals_model;
mod goals_service;
mod goals_traits;

#[cfg(test)]
mod goals_service_tests;

pub use goals_draft::GoalDraft;
pub use goals_model::{FinancialGoal, GoalPayload};
pub use goals_service::{validate_progress, GoalService};
pub use goals_traits::{GoalApiTrait, GoalServiceTrait};
