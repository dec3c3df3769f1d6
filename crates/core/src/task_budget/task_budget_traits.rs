use async_trait::async_trait;
use serde_json::Value;

use super::task_budget_draft::{TaskDraft, TaskItemDraft};
use super::task_budget_model::{BudgetTask, BudgetTaskItem, ItemPayload, TaskPayload};
use crate::errors::Result;
use crate::forms::{FormState, ValidationContext};
use crate::models::EntityId;

/// Remote operations on the `/TaskBudget` resource.
#[async_trait]
pub trait TaskBudgetApiTrait: Send + Sync {
    async fn get_tasks(&self) -> Result<Vec<BudgetTask>>;
    async fn get_task(&self, task_id: EntityId) -> Result<Option<BudgetTask>>;
    async fn add_task(&self, payload: TaskPayload) -> Result<Value>;
    async fn update_task(&self, payload: TaskPayload) -> Result<Value>;
    async fn remove_task(&self, task_id: EntityId) -> Result<Value>;
    async fn get_task_items(&self, task_id: EntityId) -> Result<Vec<BudgetTaskItem>>;
    async fn add_task_item(&self, payload: ItemPayload) -> Result<Value>;
    async fn update_task_item(&self, payload: ItemPayload) -> Result<Value>;
    async fn remove_task_item(&self, item_id: EntityId) -> Result<Value>;
    async fn recalculate_task_total(&self, task_id: EntityId) -> Result<Value>;
}

/// Trait for task budget service operations
#[async_trait]
pub trait TaskBudgetServiceTrait: Send + Sync {
    async fn load_tasks(&self) -> Result<Vec<BudgetTask>>;
    async fn load_task(&self, task_id: EntityId) -> Result<Option<BudgetTask>>;
    async fn load_items(&self, task_id: EntityId) -> Result<Vec<BudgetTaskItem>>;
    async fn save_task(
        &self,
        form: &mut FormState<TaskDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value>;

    /// Deletes the task together with its items.
    async fn remove_task(&self, task_id: EntityId) -> Result<Value>;

    /// Saves an item, then asks the server to recalculate the task total.
    async fn save_item(
        &self,
        task_id: EntityId,
        form: &mut FormState<TaskItemDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value>;

    /// Deletes an item, then asks the server to recalculate the task total.
    async fn remove_item(&self, task_id: EntityId, item_id: EntityId) -> Result<Value>;
}
