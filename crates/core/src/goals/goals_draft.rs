use rust_decimal::Decimal;

use super::goals_model::{FinancialGoal, GoalPayload};
use crate::errors::Result;
use crate::forms::forms_rules::{
    non_negative_amount, parse_form_amount, parse_form_date, positive_amount, required,
    required_date,
};
use crate::forms::{Draft, FormMode, ValidationContext};
use crate::models::RecordStatus;

/// Add/edit form of a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: String,
    pub target_date: String,
    pub initial_progress: String,
    pub status: RecordStatus,
}

impl Default for GoalDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            target_amount: String::new(),
            target_date: String::new(),
            initial_progress: "0".to_string(),
            status: RecordStatus::Active,
        }
    }
}

impl GoalDraft {
    pub fn from_goal(goal: &FinancialGoal) -> Self {
        Self {
            name: goal.name.clone(),
            target_amount: goal.target_amount.normalize().to_string(),
            target_date: goal
                .target_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            initial_progress: goal.current_progress.normalize().to_string(),
            status: goal.status,
        }
    }

    pub fn to_payload(&self, mode: FormMode) -> Result<GoalPayload> {
        let current_progress = if self.initial_progress.trim().is_empty() {
            Decimal::ZERO
        } else {
            parse_form_amount(&self.initial_progress, "Initial progress")?
        };
        Ok(GoalPayload {
            id: match mode {
                FormMode::Create => None,
                FormMode::Edit(id) => Some(id),
            },
            name: self.name.trim().to_string(),
            target_amount: parse_form_amount(&self.target_amount, "Target amount")?,
            current_progress,
            target_date: Some(parse_form_date(&self.target_date)?),
            status: self.status,
        })
    }
}

impl Draft for GoalDraft {
    const FIELDS: &'static [&'static str] = &["name", "target", "date", "progress"];

    fn validate_field(&self, field: &str, _ctx: &ValidationContext) -> Option<String> {
        match field {
            "name" => required(&self.name, "Goal name"),
            "target" => positive_amount(&self.target_amount, "Target amount"),
            "date" => required_date(&self.target_date, "Target date"),
            "progress" if !self.initial_progress.trim().is_empty() => {
                non_negative_amount(&self.initial_progress, "Initial progress")
            }
            _ => None,
        }
    }
}
