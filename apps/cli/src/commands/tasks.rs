use anyhow::bail;

use fintrack_core::forms::FormState;
use fintrack_core::task_budget::{TaskBudgetServiceTrait, TaskDraft, TaskItemDraft};

use crate::app::App;
use crate::output::{date, money, row, table};

#[derive(Debug, Default)]
pub struct TaskFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub budget: Option<String>,
}

impl TaskFields {
    fn apply_to(self, draft: &mut TaskDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(start) = self.start {
            draft.start_date = start;
        }
        if let Some(end) = self.end {
            draft.end_date = end;
        }
        if let Some(budget) = self.budget {
            draft.max_budget = budget;
        }
    }
}

#[derive(Debug, Default)]
pub struct ItemFields {
    pub name: Option<String>,
    pub category: Option<String>,
    pub cost: Option<String>,
    pub notes: Option<String>,
}

impl ItemFields {
    fn apply_to(self, draft: &mut TaskItemDraft) {
        if let Some(name) = self.name {
            draft.item_name = name;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(cost) = self.cost {
            draft.estimated_cost = cost;
        }
        if let Some(notes) = self.notes {
            draft.notes = notes;
        }
    }
}

pub async fn list(app: &App) -> anyhow::Result<()> {
    let tasks = app.tasks.load_tasks().await?;

    let mut out = table(&[
        "ID", "Name", "Start", "End", "Budget", "Estimated", "Remaining", "Over",
    ]);
    for task in &tasks {
        let usage = task.usage();
        out.add_row(row([
            task.id.to_string(),
            task.name.clone(),
            date(task.start_date),
            date(task.end_date),
            task.max_budget.map(money).unwrap_or_else(|| "-".to_string()),
            money(usage.total_estimated),
            money(usage.remaining),
            money(usage.exceeded),
        ]));
    }
    println!("Tasks\n{out}");
    Ok(())
}

pub async fn show(app: &App, id: i64) -> anyhow::Result<()> {
    let Some(task) = app.tasks.load_task(id).await? else {
        bail!("No task with id {}", id);
    };
    let items = app.tasks.load_items(id).await?;
    let usage = task.usage();

    println!("{} ({} to {})", task.name, date(task.start_date), date(task.end_date));
    if !task.description.is_empty() {
        println!("{}", task.description);
    }
    println!(
        "Budget {}, estimated {}, remaining {}",
        money(usage.max_budget),
        money(usage.total_estimated),
        money(usage.remaining)
    );
    if usage.is_over_budget() {
        println!("Over budget by {}", money(usage.exceeded));
    }

    let mut out = table(&["ID", "Item", "Category", "Cost", "Notes"]);
    for item in &items {
        out.add_row(row([
            item.id.to_string(),
            item.item_name.clone(),
            item.category.to_string(),
            money(item.estimated_cost),
            item.notes.clone().unwrap_or_default(),
        ]));
    }
    println!("Items\n{out}");
    Ok(())
}

pub async fn add(app: &App, fields: TaskFields) -> anyhow::Result<()> {
    let mut draft = TaskDraft::default();
    fields.apply_to(&mut draft);
    let mut form = FormState::create(draft);
    app.tasks.save_task(&mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn edit(app: &App, id: i64, fields: TaskFields) -> anyhow::Result<()> {
    let Some(task) = app.tasks.load_task(id).await? else {
        bail!("No task with id {}", id);
    };
    let mut draft = TaskDraft::from_task(&task);
    fields.apply_to(&mut draft);
    let mut form = FormState::edit(id, draft, TaskDraft::default());
    app.tasks.save_task(&mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn remove(app: &App, id: i64) -> anyhow::Result<()> {
    app.tasks.remove_task(id).await?;
    Ok(())
}

/// Adds an item, or edits `item_id` when given.
pub async fn save_item(
    app: &App,
    task_id: i64,
    item_id: Option<i64>,
    fields: ItemFields,
) -> anyhow::Result<()> {
    let mut form = match item_id {
        None => {
            let mut draft = TaskItemDraft::default();
            fields.apply_to(&mut draft);
            FormState::create(draft)
        }
        Some(item_id) => {
            let items = app.tasks.load_items(task_id).await?;
            let Some(item) = items.iter().find(|item| item.id == item_id) else {
                bail!("Task {} has no item {}", task_id, item_id);
            };
            let mut draft = TaskItemDraft::from_item(item);
            fields.apply_to(&mut draft);
            FormState::edit(item_id, draft, TaskItemDraft::default())
        }
    };
    app.tasks.save_item(task_id, &mut form, &app.ctx()).await?;
    Ok(())
}

pub async fn remove_item(app: &App, task_id: i64, item_id: i64) -> anyhow::Result<()> {
    app.tasks.remove_item(task_id, item_id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_fields_keep_default_category() {
        let mut draft = TaskItemDraft::default();
        ItemFields {
            name: Some("Paint".to_string()),
            cost: Some("35".to_string()),
            ..ItemFields::default()
        }
        .apply_to(&mut draft);

        assert_eq!(draft.item_name, "Paint");
        assert_eq!(draft.category, "Misc");
        assert_eq!(draft.estimated_cost, "35");
    }

    #[test]
    fn test_empty_budget_flag_clears_budget() {
        let mut draft = TaskDraft {
            name: "Garden".to_string(),
            max_budget: "200".to_string(),
            ..TaskDraft::default()
        };
        TaskFields {
            budget: Some(String::new()),
            ..TaskFields::default()
        }
        .apply_to(&mut draft);

        assert_eq!(draft.name, "Garden");
        assert!(draft.max_budget.is_empty());
    }
}
