#[cfg(test)]
mod tests {
    use crate::errors::Result;
    use crate::forms::testing::RecordingNotifier;
    use crate::forms::{FormState, Notification, ValidationContext};
    use crate::goals::*;
    use crate::models::{EntityId, RecordStatus};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    // --- Mock backend storing goals the way UpdateFinancialGoal replaces them ---
    #[derive(Clone, Default)]
    struct MockGoalApi {
        goals: Arc<Mutex<Vec<FinancialGoal>>>,
        updates: Arc<Mutex<Vec<GoalPayload>>>,
    }

    impl MockGoalApi {
        fn apply(&self, payload: &GoalPayload, id: EntityId) {
            let mut goals = self.goals.lock().unwrap();
            let goal = FinancialGoal {
                id,
                user_id: Some(1),
                name: payload.name.clone(),
                target_amount: payload.target_amount,
                current_progress: payload.current_progress,
                reported_percent: None,
                target_date: payload.target_date,
                status: payload.status,
                created_at: None,
                updated_at: None,
            };
            match goals.iter_mut().find(|g| g.id == id) {
                Some(existing) => *existing = goal,
                None => goals.push(goal),
            }
        }

        fn update_count(&self) -> usize {
            self.updates.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GoalApiTrait for MockGoalApi {
        async fn get_goals(&self) -> Result<Vec<FinancialGoal>> {
            Ok(self.goals.lock().unwrap().clone())
        }

        async fn add_goal(&self, payload: GoalPayload) -> Result<Value> {
            let id = self.goals.lock().unwrap().len() as EntityId + 1;
            self.apply(&payload, id);
            Ok(json!({ "GoalID": id }))
        }

        async fn update_goal(&self, payload: GoalPayload) -> Result<Value> {
            let id = payload.id.unwrap_or_default();
            self.apply(&payload, id);
            self.updates.lock().unwrap().push(payload);
            Ok(json!({ "StatusCode": 200 }))
        }
    }

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    async fn seeded() -> (MockGoalApi, RecordingNotifier, GoalService, FinancialGoal) {
        let api = MockGoalApi::default();
        let notifier = RecordingNotifier::new();
        let service = GoalService::new(Arc::new(api.clone()), Arc::new(notifier.clone()));

        let mut form = FormState::create(GoalDraft {
            name: "Laptop".to_string(),
            target_amount: "1200".to_string(),
            target_date: "2024-09-01".to_string(),
            initial_progress: "200".to_string(),
            ..GoalDraft::default()
        });
        service.save_goal(&mut form, &ctx()).await.unwrap();
        let goal = service.load_goals().await.unwrap().remove(0);
        (api, notifier, service, goal)
    }

    #[tokio::test]
    async fn test_add_goal_round_trip() {
        let (_api, notifier, _service, goal) = seeded().await;
        assert_eq!(goal.name, "Laptop");
        assert_eq!(goal.target_amount, dec!(1200));
        assert_eq!(goal.current_progress, dec!(200));
        assert_eq!(goal.progress_percent(), dec!(16.7));
        assert_eq!(
            notifier.last(),
            Some(Notification::Success(
                "Financial goal added successfully!".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_goal_form_requires_positive_target() {
        let api = MockGoalApi::default();
        let notifier = RecordingNotifier::new();
        let service = GoalService::new(Arc::new(api.clone()), Arc::new(notifier));

        let mut form = FormState::create(GoalDraft {
            name: "Trip".to_string(),
            target_amount: "0".to_string(),
            target_date: String::new(),
            initial_progress: "-5".to_string(),
            ..GoalDraft::default()
        });
        let err = service.save_goal(&mut form, &ctx()).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("target"), Some("Target amount must be greater than 0."));
        assert_eq!(fields.get("date"), Some("Target date is required."));
        assert_eq!(fields.get("progress"), Some("Initial progress cannot be negative."));
        assert!(api.goals.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mark_complete_is_idempotent() {
        let (api, _notifier, service, goal) = seeded().await;

        service.mark_complete(&goal).await.unwrap();
        let once = service.load_goals().await.unwrap();
        service.mark_complete(&once[0]).await.unwrap();
        let twice = service.load_goals().await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice[0].current_progress, dec!(1200));
        assert!(twice[0].is_complete());
        assert_eq!(api.update_count(), 2);
    }

    #[tokio::test]
    async fn test_progress_cannot_go_backwards() {
        let (api, notifier, service, goal) = seeded().await;

        let err = service.update_progress(&goal, "150").await.unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|f| f.get("progress")),
            Some("Progress cannot be lower than the current progress (200).")
        );
        assert!(matches!(notifier.last(), Some(Notification::Warning(_))));
        assert_eq!(api.update_count(), 0);

        service.update_progress(&goal, "450.5").await.unwrap();
        let goals = service.load_goals().await.unwrap();
        assert_eq!(goals[0].current_progress, dec!(450.5));
    }

    #[tokio::test]
    async fn test_deactivate_sends_inactive_status() {
        let (api, notifier, service, goal) = seeded().await;

        service.deactivate(&goal).await.unwrap();

        let sent = api.updates.lock().unwrap()[0].clone();
        assert_eq!(sent.status, RecordStatus::Inactive);
        assert_eq!(sent.current_progress, goal.current_progress);
        assert_eq!(serde_json::to_value(&sent).unwrap()["Status"], "I");
        assert_eq!(
            notifier.last(),
            Some(Notification::Success("Status updated successfully!".to_string()))
        );
    }
}
