use async_trait::async_trait;
use log::info;
use serde_json::Value;

use fintrack_core::errors::Result;
use fintrack_core::goals::{FinancialGoal, GoalApiTrait, GoalPayload};

use crate::client::FintrackApiClient;

#[async_trait]
impl GoalApiTrait for FintrackApiClient {
    async fn get_goals(&self) -> Result<Vec<FinancialGoal>> {
        let goals: Vec<FinancialGoal> = self
            .get_list(
                "/FinancialGoal/GetAllFinancialGoals",
                "userId",
                "GetAllFinancialGoals",
            )
            .await?;
        info!("[FintrackApi] Fetched {} financial goals", goals.len());
        Ok(goals)
    }

    async fn add_goal(&self, payload: GoalPayload) -> Result<Value> {
        self.post("/FinancialGoal/AddFinancialGoal", &payload).await
    }

    async fn update_goal(&self, payload: GoalPayload) -> Result<Value> {
        self.post("/FinancialGoal/UpdateFinancialGoal", &payload)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client, RecordingTransport};
    use fintrack_core::models::RecordStatus;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[tokio::test]
    async fn test_goals_decode_with_progress_percent() {
        let transport = RecordingTransport::new();
        transport.respond(
            200,
            json!({ "ResultSet": [{
                "GoalID": 4, "UserID": 9, "GoalName": "Car", "TargetAmount": "5000",
                "CurrentProgress": 1250, "ProgressPercent": 25, "TargetDate": "2025-01-01",
                "Status": "A"
            }]}),
        );
        let api = client(&transport, Some(9));

        let goals = api.get_goals().await.unwrap();
        assert_eq!(goals[0].name, "Car");
        assert_eq!(goals[0].progress_percent(), dec!(25));
        assert_eq!(
            transport.last().path_and_query(),
            "/FinancialGoal/GetAllFinancialGoals?userId=9"
        );
    }

    #[tokio::test]
    async fn test_deactivation_update_sends_status_code() {
        let transport = RecordingTransport::new();
        let api = client(&transport, Some(9));

        api.update_goal(GoalPayload {
            id: Some(4),
            name: "Car".to_string(),
            target_amount: dec!(5000),
            current_progress: dec!(1250),
            target_date: None,
            status: RecordStatus::Inactive,
        })
        .await
        .unwrap();

        let sent = transport.last();
        assert_eq!(sent.path, "/FinancialGoal/UpdateFinancialGoal");
        let body = sent.body.unwrap();
        assert_eq!(body["GoalID"], 4);
        assert_eq!(body["Status"], "I");
        assert_eq!(body["UserID"], 9);
    }
}
