//! Goals domain models.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::models::{ser_status_code, EntityId, RecordStatus, UserId, WireRecord};
use crate::utils::time_utils::days_until;
use crate::utils::wire::{
    de_decimal, de_id, de_opt_date, de_opt_decimal, de_opt_id, de_string, Spellings,
};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialGoal {
    #[serde(rename = "GoalID", alias = "goalId", default, deserialize_with = "de_id")]
    pub id: EntityId,
    #[serde(rename = "UserID", alias = "userId", default, deserialize_with = "de_opt_id")]
    pub user_id: Option<UserId>,
    #[serde(rename = "GoalName", alias = "goalName", default, deserialize_with = "de_string")]
    pub name: String,
    #[serde(
        rename = "TargetAmount",
        alias = "targetAmount",
        default,
        deserialize_with = "de_decimal"
    )]
    pub target_amount: Decimal,
    #[serde(
        rename = "CurrentProgress",
        alias = "currentProgress",
        default,
        deserialize_with = "de_decimal"
    )]
    pub current_progress: Decimal,
    #[serde(
        rename = "ProgressPercent",
        alias = "progressPercent",
        default,
        deserialize_with = "de_opt_decimal"
    )]
    pub reported_percent: Option<Decimal>,
    #[serde(
        rename = "TargetDate",
        alias = "targetDate",
        default,
        deserialize_with = "de_opt_date"
    )]
    pub target_date: Option<NaiveDate>,
    #[serde(rename = "Status", alias = "status", default)]
    pub status: RecordStatus,
    #[serde(rename = "CreatedAt", alias = "createdAt", default, deserialize_with = "de_opt_date")]
    pub created_at: Option<NaiveDate>,
    #[serde(rename = "UpdatedAt", alias = "updatedAt", default, deserialize_with = "de_opt_date")]
    pub updated_at: Option<NaiveDate>,
}

impl FinancialGoal {
    /// The backend's percentage when it sent one, otherwise current / target.
    pub fn progress_percent(&self) -> Decimal {
        if let Some(reported) = self.reported_percent {
            return reported;
        }
        if self.target_amount.is_zero() {
            return Decimal::ZERO;
        }
        (self.current_progress / self.target_amount * Decimal::ONE_HUNDRED).round_dp_with_strategy(
            PERCENT_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        )
    }

    pub fn is_complete(&self) -> bool {
        !self.target_amount.is_zero() && self.current_progress >= self.target_amount
    }

    /// Days left until the target date; negative once it has passed.
    pub fn days_remaining(&self, today: NaiveDate) -> Option<i64> {
        self.target_date.map(|target| days_until(today, target))
    }

    pub fn remaining_amount(&self) -> Decimal {
        (self.target_amount - self.current_progress).max(Decimal::ZERO)
    }

    /// Full-replace payload carrying this goal's current values.
    pub fn to_payload(&self) -> GoalPayload {
        GoalPayload {
            id: Some(self.id),
            name: self.name.clone(),
            target_amount: self.target_amount,
            current_progress: self.current_progress,
            target_date: self.target_date,
            status: self.status,
        }
    }
}

/// Body of AddFinancialGoal / UpdateFinancialGoal.
///
/// The acting user's id is added by the data-access client.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GoalPayload {
    #[serde(rename = "GoalID", skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "GoalName")]
    pub name: String,
    pub target_amount: Decimal,
    pub current_progress: Decimal,
    pub target_date: Option<NaiveDate>,
    #[serde(serialize_with = "ser_status_code")]
    pub status: RecordStatus,
}

impl WireRecord for FinancialGoal {
    const SPELLINGS: Spellings = &[
        &["GoalID", "goalId"],
        &["UserID", "userId"],
        &["GoalName", "goalName"],
        &["TargetAmount", "targetAmount"],
        &["CurrentProgress", "currentProgress"],
        &["ProgressPercent", "progressPercent"],
        &["TargetDate", "targetDate"],
        &["Status", "status"],
        &["CreatedAt", "createdAt"],
        &["UpdatedAt", "updatedAt"],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn goal(target: Decimal, current: Decimal) -> FinancialGoal {
        FinancialGoal {
            id: 3,
            user_id: Some(1),
            name: "Bike".to_string(),
            target_amount: target,
            current_progress: current,
            reported_percent: None,
            target_date: NaiveDate::from_ymd_opt(2024, 12, 31),
            status: RecordStatus::Active,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_goal_decodes_result_set_row() {
        let g: FinancialGoal = serde_json::from_str(
            r#"{"GoalID": 4, "UserID": 1, "GoalName": " Car ", "TargetAmount": 5000,
                "CurrentProgress": null, "ProgressPercent": 12.5,
                "TargetDate": "2025-01-01T00:00:00", "Status": "I"}"#,
        )
        .unwrap();
        assert_eq!(g.name, "Car");
        assert_eq!(g.current_progress, Decimal::ZERO);
        assert_eq!(g.progress_percent(), dec!(12.5));
        assert_eq!(g.status, RecordStatus::Inactive);
        assert_eq!(g.created_at, None);
    }

    #[test]
    fn test_progress_percent_falls_back_to_ratio() {
        assert_eq!(goal(dec!(300), dec!(100)).progress_percent(), dec!(33.3));
        assert_eq!(goal(dec!(0), dec!(100)).progress_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_days_remaining() {
        let g = goal(dec!(10), dec!(0));
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(g.days_remaining(today), Some(30));
    }

    #[test]
    fn test_payload_uses_status_code() {
        let json = serde_json::to_value(goal(dec!(10), dec!(2)).to_payload()).unwrap();
        assert_eq!(json["GoalID"], 3);
        assert_eq!(json["GoalName"], "Bike");
        assert_eq!(json["Status"], "A");
        assert_eq!(json["TargetDate"], "2024-12-31");
    }
}
