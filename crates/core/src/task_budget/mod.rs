//! Task budget module - tasks with itemised cost estimates.

mod task_budget_draft;
mod task_budget_model;
mod task_budget_service;
mod task_budget_traits;


pub use task_budget_draft::{TaskDraft, TaskItemDraft};
pub use task_budget_model::{
    BudgetTask, BudgetTaskItem, BudgetUsage, ItemCategory, ItemPayload, ItemRef, TaskPayload,
    TaskRef,
};
pub use task_budget_service::TaskBudgetService;
pub use task_budget_traits::{TaskBudgetApiTrait, TaskBudgetServiceTrait};
