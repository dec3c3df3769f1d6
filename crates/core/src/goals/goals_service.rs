use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use rust_decimal::Decimal;
use serde_json::Value;

use super::goals_draft::GoalDraft;
use super::goals_model::FinancialGoal;
use super::goals_traits::{GoalApiTrait, GoalServiceTrait};
use crate::errors::Result;
use crate::forms::{
    run_action, submit_form, FieldErrors, FormMode, FormState, Notification, Notifier,
    SubmitMessages, ValidationContext,
};
use crate::models::RecordStatus;
use crate::utils::wire::parse_decimal_strict;

const ADD_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Financial goal added successfully!",
    failure: "Failed to add financial goal.",
};

const EDIT_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Financial goal updated successfully!",
    failure: "Failed to update financial goal.",
};

const PROGRESS_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Progress updated successfully!",
    failure: "Failed to update progress.",
};

const COMPLETE_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Goal marked as completed!",
    failure: "Failed to complete goal.",
};

const STATUS_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Status updated successfully!",
    failure: "Failed to update status.",
};

/// Checks a progress update against the goal's current progress.
pub fn validate_progress(goal: &FinancialGoal, raw: &str) -> Result<Decimal> {
    let message = match parse_decimal_strict(raw) {
        None if raw.trim().is_empty() => "Progress is required.".to_string(),
        None => "Progress must be a number.".to_string(),
        Some(v) if v.is_sign_negative() && !v.is_zero() => {
            "Progress cannot be negative.".to_string()
        }
        Some(v) if v < goal.current_progress => format!(
            "Progress cannot be lower than the current progress ({}).",
            goal.current_progress.normalize()
        ),
        Some(v) => return Ok(v),
    };
    let mut errors = FieldErrors::new();
    errors.insert("progress", message);
    Err(errors.into())
}

/// Controller for the planning page.
pub struct GoalService {
    api: Arc<dyn GoalApiTrait>,
    notifier: Arc<dyn Notifier>,
}

impl GoalService {
    pub fn new(api: Arc<dyn GoalApiTrait>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    async fn load_goals(&self) -> Result<Vec<FinancialGoal>> {
        match self.api.get_goals().await {
            Ok(goals) => {
                debug!("Loaded {} financial goals", goals.len());
                Ok(goals)
            }
            Err(e) => {
                error!("Error loading goals: {}", e);
                self.notifier.notify(Notification::Error(
                    "Failed to load financial goals.".to_string(),
                ));
                Err(e)
            }
        }
    }

    async fn save_goal(
        &self,
        form: &mut FormState<GoalDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value> {
        let messages = match form.mode() {
            FormMode::Create => ADD_MESSAGES,
            FormMode::Edit(_) => EDIT_MESSAGES,
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
                    FormMode::Create => api.add_goal(payload).await,
                    FormMode::Edit(_) => api.update_goal(payload).await,
                }
            },
        )
        .await
    }

    async fn update_progress(&self, goal: &FinancialGoal, new_progress: &str) -> Result<Value> {
        let progress = match validate_progress(goal, new_progress) {
            Ok(v) => v,
            Err(e) => {
                self.notifier.notify(Notification::Warning(e.to_string()));
                return Err(e);
            }
        };
        let mut payload = goal.to_payload();
        payload.current_progress = progress;
        run_action(
            self.notifier.as_ref(),
            PROGRESS_MESSAGES,
            self.api.update_goal(payload),
        )
        .await
    }

    async fn mark_complete(&self, goal: &FinancialGoal) -> Result<Value> {
        let mut payload = goal.to_payload();
        payload.current_progress = goal.target_amount;
        run_action(
            self.notifier.as_ref(),
            COMPLETE_MESSAGES,
            self.api.update_goal(payload),
        )
        .await
    }

    async fn set_status(&self, goal: &FinancialGoal, status: RecordStatus) -> Result<Value> {
        let mut payload = goal.to_payload();
        payload.status = status;
        run_action(
            self.notifier.as_ref(),
            STATUS_MESSAGES,
            self.api.update_goal(payload),
        )
        .await
    }

    async fn deactivate(&self, goal: &FinancialGoal) -> Result<Value> {
        self.set_status(goal, RecordStatus::Inactive).await
    }
}
