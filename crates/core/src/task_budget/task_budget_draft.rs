use super::task_budget_model::{BudgetTask, BudgetTaskItem, ItemCategory, ItemPayload, TaskPayload};
use crate::errors::Result;
use crate::forms::forms_rules::{
    non_negative_amount, parse_form_amount, parse_form_date, parse_optional_amount, required,
    required_date,
};
use crate::forms::{Draft, FormMode, ValidationContext};
use crate::models::EntityId;

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Add/edit form of a task. The budget is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub max_budget: String,
}

impl TaskDraft {
    pub fn from_task(task: &BudgetTask) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            start_date: format_date(task.start_date),
            end_date: format_date(task.end_date),
            max_budget: task
                .max_budget
                .map(|b| b.normalize().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_payload(&self, mode: FormMode) -> Result<TaskPayload> {
        Ok(TaskPayload {
            id: match mode {
                FormMode::Create => None,
                FormMode::Edit(id) => Some(id),
            },
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            start_date: parse_form_date(&self.start_date)?,
            end_date: parse_form_date(&self.end_date)?,
            max_budget: parse_optional_amount(&self.max_budget, "Max budget")?,
        })
    }
}

impl Draft for TaskDraft {
    const FIELDS: &'static [&'static str] = &["name", "start", "end", "budget"];

    fn validate_field(&self, field: &str, _ctx: &ValidationContext) -> Option<String> {
        match field {
            "name" => required(&self.name, "Task name"),
            "start" => required_date(&self.start_date, "Start date"),
            "end" => required_date(&self.end_date, "End date").or_else(|| {
                match (
                    parse_form_date(&self.start_date),
                    parse_form_date(&self.end_date),
                ) {
                    (Ok(start), Ok(end)) if end < start => {
                        Some("End date cannot be before start date.".to_string())
                    }
                    _ => None,
                }
            }),
            "budget" if !self.max_budget.trim().is_empty() => {
                non_negative_amount(&self.max_budget, "Max budget")
            }
            _ => None,
        }
    }
}

/// Add/edit form of a task item.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskItemDraft {
    pub item_name: String,
    pub category: String,
    pub estimated_cost: String,
    pub notes: String,
}

impl Default for TaskItemDraft {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            category: ItemCategory::default().to_string(),
            estimated_cost: String::new(),
            notes: String::new(),
        }
    }
}

impl TaskItemDraft {
    pub fn from_item(item: &BudgetTaskItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            category: item.category.to_string(),
            estimated_cost: item.estimated_cost.normalize().to_string(),
            notes: item.notes.clone().unwrap_or_default(),
        }
    }

    pub fn to_payload(&self, task_id: EntityId, mode: FormMode) -> Result<ItemPayload> {
        Ok(ItemPayload {
            id: match mode {
                FormMode::Create => None,
                FormMode::Edit(id) => Some(id),
            },
            task_id,
            item_name: self.item_name.trim().to_string(),
            category: ItemCategory::parse(&self.category).unwrap_or_default(),
            estimated_cost: parse_form_amount(&self.estimated_cost, "Estimated cost")?,
            notes: self.notes.trim().to_string(),
        })
    }
}

impl Draft for TaskItemDraft {
    const FIELDS: &'static [&'static str] = &["name", "category", "cost"];

    fn validate_field(&self, field: &str, _ctx: &ValidationContext) -> Option<String> {
        match field {
            "name" => required(&self.item_name, "Item name"),
            "category" if ItemCategory::parse(&self.category).is_none() => Some(format!(
                "Category must be one of {}.",
                ItemCategory::ALL.map(|c| c.as_str()).join(", ")
            )),
            "cost" => non_negative_amount(&self.estimated_cost, "Estimated cost"),
            _ => None,
        }
    }
}
