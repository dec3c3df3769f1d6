use async_trait::async_trait;
use log::info;
use serde_json::Value;

use fintrack_core::errors::Result;
use fintrack_core::models::EntityId;
use fintrack_core::task_budget::{
    BudgetTask, BudgetTaskItem, ItemPayload, ItemRef, TaskBudgetApiTrait, TaskPayload, TaskRef,
};

use crate::client::FintrackApiClient;
use crate::envelope::decode_list;
use crate::transport::ApiRequest;

#[async_trait]
impl TaskBudgetApiTrait for FintrackApiClient {
    async fn get_tasks(&self) -> Result<Vec<BudgetTask>> {
        let tasks: Vec<BudgetTask> = self
            .get_list("/TaskBudget/GetAllTasks", "userId", "GetAllTasks")
            .await?;
        info!("[FintrackApi] Fetched {} tasks", tasks.len());
        Ok(tasks)
    }

    async fn get_task(&self, task_id: EntityId) -> Result<Option<BudgetTask>> {
        self.user_id()?;
        let request = ApiRequest::get("/TaskBudget/GetTaskById").query("taskId", task_id);
        self.get_one(request, "GetTaskById").await
    }

    async fn add_task(&self, payload: TaskPayload) -> Result<Value> {
        self.post("/TaskBudget/AddTask", &payload).await
    }

    async fn update_task(&self, payload: TaskPayload) -> Result<Value> {
        self.post("/TaskBudget/UpdateTask", &payload).await
    }

    async fn remove_task(&self, task_id: EntityId) -> Result<Value> {
        self.post("/TaskBudget/DeleteTask", &TaskRef { id: task_id })
            .await
    }

    async fn get_task_items(&self, task_id: EntityId) -> Result<Vec<BudgetTaskItem>> {
        self.user_id()?;
        let request = ApiRequest::get("/TaskBudget/GetTaskItems").query("taskId", task_id);
        let body = self.execute(request).await?;
        let items: Vec<BudgetTaskItem> =
            decode_list(body, self.config().shape_policy, "GetTaskItems")?;
        info!("[FintrackApi] Fetched {} items for task {}", items.len(), task_id);
        Ok(items)
    }

    async fn add_task_item(&self, payload: ItemPayload) -> Result<Value> {
        self.post("/TaskBudget/AddTaskItem", &payload).await
    }

    async fn update_task_item(&self, payload: ItemPayload) -> Result<Value> {
        self.post("/TaskBudget/UpdateTaskItem", &payload).await
    }

    async fn remove_task_item(&self, item_id: EntityId) -> Result<Value> {
        self.post("/TaskBudget/DeleteTaskItem", &ItemRef { id: item_id })
            .await
    }

    async fn recalculate_task_total(&self, task_id: EntityId) -> Result<Value> {
        self.post("/TaskBudget/RecalculateTaskTotal", &TaskRef { id: task_id })
            .await
    }
}
