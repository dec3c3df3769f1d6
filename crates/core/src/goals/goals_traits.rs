use async_trait::async_trait;
use serde_json::Value;

use super::goals_draft::GoalDraft;
use super::goals_model::{FinancialGoal, GoalPayload};
use crate::errors::Result;
use crate::forms::{FormState, ValidationContext};
use crate::models::RecordStatus;

/// Remote operations on the `/FinancialGoal` resource.
#[async_trait]
pub trait GoalApiTrait: Send + Sync {
    async fn get_goals(&self) -> Result<Vec<FinancialGoal>>;
    async fn add_goal(&self, payload: GoalPayload) -> Result<Value>;
    async fn update_goal(&self, payload: GoalPayload) -> Result<Value>;
}

/// Trait for goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    async fn load_goals(&self) -> Result<Vec<FinancialGoal>>;
    async fn save_goal(
        &self,
        form: &mut FormState<GoalDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value>;

    /// Sets the current progress; it may never go negative or backwards.
    async fn update_progress(&self, goal: &FinancialGoal, new_progress: &str) -> Result<Value>;

    /// Sets current progress to the target. Repeating it changes nothing.
    async fn mark_complete(&self, goal: &FinancialGoal) -> Result<Value>;

    async fn set_status(&self, goal: &FinancialGoal, status: RecordStatus) -> Result<Value>;

    /// Soft delete: flips the status to inactive.
    async fn deactivate(&self, goal: &FinancialGoal) -> Result<Value>;
}
