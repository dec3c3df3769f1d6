use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};
use serde_json::Value;

use super::task_budget_draft::{TaskDraft, TaskItemDraft};
use super::task_budget_model::{BudgetTask, BudgetTaskItem};
use super::task_budget_traits::{TaskBudgetApiTrait, TaskBudgetServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::forms::{
    run_action, submit_form, FormMode, FormState, Notification, Notifier, SubmitMessages,
    ValidationContext,
};
use crate::models::EntityId;

const ADD_TASK_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Task created successfully",
    failure: "Failed to create task",
};

const UPDATE_TASK_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Task updated successfully",
    failure: "Failed to update task",
};

const REMOVE_TASK_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Task deleted successfully",
    failure: "Failed to delete task",
};

const ADD_ITEM_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Item added successfully",
    failure: "Failed to save item",
};

const UPDATE_ITEM_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Item updated successfully",
    failure: "Failed to save item",
};

const REMOVE_ITEM_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Item deleted successfully",
    failure: "Failed to delete item",
};

/// Controller for the task budget page.
pub struct TaskBudgetService {
    api: Arc<dyn TaskBudgetApiTrait>,
    notifier: Arc<dyn Notifier>,
}

impl TaskBudgetService {
    pub fn new(api: Arc<dyn TaskBudgetApiTrait>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// The item write already succeeded; a failed recalculation only leaves
    /// the displayed total stale until the next one.
    async fn recalculate(&self, task_id: EntityId) {
        if let Err(e) = self.api.recalculate_task_total(task_id).await {
            error!("Error recalculating total of task {}: {}", task_id, e);
            self.notifier.notify(Notification::Warning(
                "Failed to recalculate task total".to_string(),
            ));
        }
    }
}

#[async_trait]
impl TaskBudgetServiceTrait for TaskBudgetService {
    async fn load_tasks(&self) -> Result<Vec<BudgetTask>> {
        match self.api.get_tasks().await {
            Ok(tasks) => {
                debug!("Loaded {} tasks", tasks.len());
                Ok(tasks)
            }
            Err(e) => {
                error!("Error loading tasks: {}", e);
                self.notifier
                    .notify(Notification::Error("Failed to load tasks".to_string()));
                Err(e)
            }
        }
    }

    async fn load_task(&self, task_id: EntityId) -> Result<Option<BudgetTask>> {
        self.api.get_task(task_id).await
    }

    async fn load_items(&self, task_id: EntityId) -> Result<Vec<BudgetTaskItem>> {
        match self.api.get_task_items(task_id).await {
            Ok(items) => {
                debug!("Loaded {} items of task {}", items.len(), task_id);
                Ok(items)
            }
            Err(e) => {
                error!("Error loading items: {}", e);
                self.notifier
                    .notify(Notification::Error("Failed to load items".to_string()));
                Err(e)
            }
        }
    }

    async fn save_task(
        &self,
        form: &mut FormState<TaskDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value> {
        let messages = match form.mode() {
            FormMode::Create => ADD_TASK_MESSAGES,
            FormMode::Edit(_) => UPDATE_TASK_MESSAGES,
        };
        let api = self.api.clone();
        submit_form(
            form,
            ctx,
            self.notifier.as_ref(),
            messages,
            |mode, draft| async move {
                let payload = draft.to_payload(mode)?;
                match mode {
                    FormMode::Create => api.add_task(payload).await,
                    FormMode::Edit(_) => api.update_task(payload).await,
                }
            },
        )
        .await
    }

    async fn remove_task(&self, task_id: EntityId) -> Result<Value> {
        run_action(
            self.notifier.as_ref(),
            REMOVE_TASK_MESSAGES,
            self.api.remove_task(task_id),
        )
        .await
    }

    async fn save_item(
        &self,
        task_id: EntityId,
        form: &mut FormState<TaskItemDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value> {
        if task_id <= 0 {
            warn!("Refusing to save an item without a selected task");
            self.notifier
                .notify(Notification::Error("No task selected".to_string()));
            return Err(Error::Validation(ValidationError::MissingField(
                "TaskID".to_string(),
            )));
        }
        let messages = match form.mode() {
            FormMode::Create => ADD_ITEM_MESSAGES,
            FormMode::Edit(_) => UPDATE_ITEM_MESSAGES,
        };
        let api = self.api.clone();
        let response = submit_form(
            form,
            ctx,
            self.notifier.as_ref(),
            messages,
            |mode, draft| async move {
                let payload = draft.to_payload(task_id, mode)?;
                match mode {
                    FormMode::Create => api.add_task_item(payload).await,
                    FormMode::Edit(_) => api.update_task_item(payload).await,
                }
            },
        )
        .await?;
        self.recalculate(task_id).await;
        Ok(response)
    }

    async fn remove_item(&self, task_id: EntityId, item_id: EntityId) -> Result<Value> {
        let response = run_action(
            self.notifier.as_ref(),
            REMOVE_ITEM_MESSAGES,
            self.api.remove_task_item(item_id),
        )
        .await?;
        self.recalculate(task_id).await;
        Ok(response)
    }
}
