//! Task budget domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::models::{EntityId, UserId, WireRecord};
use crate::utils::wire::{
    de_decimal, de_id, de_opt_date, de_opt_decimal, de_opt_id, de_opt_string, de_string,
    Spellings,
};

/// Spending category of a task item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemCategory {
    Supplies,
    Food,
    Travel,
    Tools,
    #[default]
    Misc,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 5] = [
        ItemCategory::Supplies,
        ItemCategory::Food,
        ItemCategory::Travel,
        ItemCategory::Tools,
        ItemCategory::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Supplies => "Supplies",
            ItemCategory::Food => "Food",
            ItemCategory::Travel => "Travel",
            ItemCategory::Tools => "Tools",
            ItemCategory::Misc => "Misc",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ItemCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => ItemCategory::parse(&s).unwrap_or_else(|| {
                if !s.trim().is_empty() {
                    log::warn!("Unknown item category '{}', treating as Misc", s);
                }
                ItemCategory::Misc
            }),
            _ => ItemCategory::Misc,
        })
    }
}

/// Wire shape of a task; the backend has used several spellings over time.
#[derive(Debug, Deserialize)]
struct BudgetTaskWire {
    #[serde(rename = "TaskID", default, deserialize_with = "de_opt_id")]
    task_id: Option<EntityId>,
    #[serde(rename = "id", default, deserialize_with = "de_opt_id")]
    id: Option<EntityId>,
    #[serde(rename = "UserID", alias = "userId", default, deserialize_with = "de_opt_id")]
    user_id: Option<UserId>,
    #[serde(rename = "Name", default, deserialize_with = "de_opt_string")]
    name: Option<String>,
    #[serde(
        rename = "TaskName",
        alias = "taskName",
        default,
        deserialize_with = "de_opt_string"
    )]
    task_name: Option<String>,
    #[serde(
        rename = "Description",
        alias = "description",
        default,
        deserialize_with = "de_string"
    )]
    description: String,
    #[serde(rename = "StartDate", alias = "startDate", default, deserialize_with = "de_opt_date")]
    start_date: Option<NaiveDate>,
    #[serde(rename = "EndDate", alias = "endDate", default, deserialize_with = "de_opt_date")]
    end_date: Option<NaiveDate>,
    #[serde(
        rename = "MaxBudget",
        alias = "maxBudget",
        alias = "budget",
        default,
        deserialize_with = "de_opt_decimal"
    )]
    max_budget: Option<Decimal>,
    #[serde(
        rename = "TotalEstimated",
        alias = "totalEstimated",
        default,
        deserialize_with = "de_opt_decimal"
    )]
    total_estimated: Option<Decimal>,
    #[serde(rename = "EstimatedCost", default, deserialize_with = "de_opt_decimal")]
    estimated_cost: Option<Decimal>,
}

/// Domain model representing a budgeted task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "BudgetTaskWire")]
pub struct BudgetTask {
    #[serde(rename = "TaskID")]
    pub id: EntityId,
    #[serde(rename = "UserID")]
    pub user_id: Option<UserId>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "StartDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "EndDate")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "MaxBudget")]
    pub max_budget: Option<Decimal>,
    /// Server-derived sum of the task's item costs.
    #[serde(rename = "TotalEstimated")]
    pub total_estimated: Decimal,
}

impl From<BudgetTaskWire> for BudgetTask {
    fn from(wire: BudgetTaskWire) -> Self {
        Self {
            id: wire.task_id.or(wire.id).unwrap_or_default(),
            user_id: wire.user_id,
            name: wire.name.or(wire.task_name).unwrap_or_default(),
            description: wire.description,
            start_date: wire.start_date,
            end_date: wire.end_date,
            max_budget: wire.max_budget,
            total_estimated: wire
                .total_estimated
                .or(wire.estimated_cost)
                .unwrap_or(Decimal::ZERO),
        }
    }
}

/// How a task's estimated total compares to its budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub total_estimated: Decimal,
    pub max_budget: Decimal,
    pub remaining: Decimal,
    pub exceeded: Decimal,
}

impl BudgetUsage {
    pub fn is_over_budget(&self) -> bool {
        self.exceeded > Decimal::ZERO
    }
}

impl BudgetTask {
    /// Remaining and exceeded amounts; a task without a budget counts as budget 0.
    pub fn usage(&self) -> BudgetUsage {
        let max_budget = self.max_budget.unwrap_or(Decimal::ZERO);
        let total = self.total_estimated;
        BudgetUsage {
            total_estimated: total,
            max_budget,
            remaining: (max_budget - total).max(Decimal::ZERO),
            exceeded: (total - max_budget).max(Decimal::ZERO),
        }
    }
}

/// Body of AddTask / UpdateTask.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TaskPayload {
    #[serde(rename = "TaskID", skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_budget: Option<Decimal>,
}

/// Domain model representing one cost line of a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetTaskItem {
    #[serde(rename = "ItemID", alias = "id", default, deserialize_with = "de_id")]
    pub id: EntityId,
    #[serde(rename = "TaskID", alias = "taskId", default, deserialize_with = "de_id")]
    pub task_id: EntityId,
    #[serde(rename = "ItemName", alias = "name", default, deserialize_with = "de_string")]
    pub item_name: String,
    #[serde(rename = "Category", alias = "category", default)]
    pub category: ItemCategory,
    #[serde(
        rename = "EstimatedCost",
        alias = "estimatedCost",
        alias = "cost",
        default,
        deserialize_with = "de_decimal"
    )]
    pub estimated_cost: Decimal,
    #[serde(
        rename = "Notes",
        alias = "Note",
        alias = "notes",
        default,
        deserialize_with = "de_opt_string"
    )]
    pub notes: Option<String>,
}

/// Body of AddTaskItem / UpdateTaskItem.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemPayload {
    #[serde(rename = "ItemID", skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "TaskID")]
    pub task_id: EntityId,
    pub item_name: String,
    pub category: ItemCategory,
    pub estimated_cost: Decimal,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TaskRef {
    #[serde(rename = "TaskID")]
    pub id: EntityId,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ItemRef {
    #[serde(rename = "ItemID")]
    pub id: EntityId,
}

// `TaskID`/`id`, `Name`/`TaskName` and the two total keys are separate fields
// of the wire struct, resolved in `From<BudgetTaskWire>`.
impl WireRecord for BudgetTask {
    const SPELLINGS: Spellings = &[
        &["UserID", "userId"],
        &["TaskName", "taskName"],
        &["Description", "description"],
        &["StartDate", "startDate"],
        &["EndDate", "endDate"],
        &["MaxBudget", "maxBudget", "budget"],
        &["TotalEstimated", "totalEstimated"],
    ];
}

impl WireRecord for BudgetTaskItem {
    const SPELLINGS: Spellings = &[
        &["ItemID", "id"],
        &["TaskID", "taskId"],
        &["ItemName", "name"],
        &["Category", "category"],
        &["EstimatedCost", "estimatedCost", "cost"],
        &["Notes", "Note", "notes"],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_task_accepts_every_name_and_total_spelling() {
        let a: BudgetTask = serde_json::from_str(
            r#"{"TaskID": 1, "Name": "Move", "TaskName": "ignored", "StartDate": "2024-01-01",
                "EndDate": "2024-01-31", "MaxBudget": "300", "TotalEstimated": 120,
                "EstimatedCost": 999}"#,
        )
        .unwrap();
        assert_eq!(a.name, "Move");
        assert_eq!(a.total_estimated, dec!(120));
        assert_eq!(a.max_budget, Some(dec!(300)));

        let b: BudgetTask = serde_json::from_str(
            r#"{"id": "2", "taskName": "Party", "EstimatedCost": "45,5", "MaxBudget": null}"#,
        )
        .unwrap();
        assert_eq!(b.id, 2);
        assert_eq!(b.name, "Party");
        assert_eq!(b.total_estimated, dec!(45.5));
        assert_eq!(b.max_budget, None);
    }

    #[test]
    fn test_usage_remaining_and_exceeded() {
        let mut task: BudgetTask = serde_json::from_str(r#"{"TaskID": 1}"#).unwrap();
        task.max_budget = Some(dec!(100));
        task.total_estimated = dec!(80);
        let usage = task.usage();
        assert_eq!(usage.remaining, dec!(20));
        assert_eq!(usage.exceeded, Decimal::ZERO);

        task.total_estimated = dec!(130);
        let usage = task.usage();
        assert_eq!(usage.remaining, Decimal::ZERO);
        assert_eq!(usage.exceeded, dec!(30));
        assert!(usage.is_over_budget());
    }

    #[test]
    fn test_item_category_is_lenient() {
        let item: BudgetTaskItem = serde_json::from_str(
            r#"{"ItemID": 3, "TaskID": 1, "ItemName": "Tape", "Category": "supplies",
                "EstimatedCost": 4, "Note": "roll"}"#,
        )
        .unwrap();
        assert_eq!(item.category, ItemCategory::Supplies);
        assert_eq!(item.notes.as_deref(), Some("roll"));

        let item: BudgetTaskItem =
            serde_json::from_str(r#"{"ItemID": 4, "Category": "Gadgets"}"#).unwrap();
        assert_eq!(item.category, ItemCategory::Misc);
    }
}
