#[cfg(test)]
mod tests {
    use crate::errors::{ApiError, Error, Result};
    use crate::forms::testing::RecordingNotifier;
    use crate::forms::{FormState, Notification, ValidationContext};
    use crate::models::{EntityId, RecordStatus};
    use crate::wishes::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockWishApi {
        wishes: Arc<Mutex<Vec<Wish>>>,
        offline: bool,
    }

    #[async_trait]
    impl WishApiTrait for MockWishApi {
        async fn get_wishes(&self) -> Result<WishListing> {
            if self.offline {
                return Err(Error::Api(ApiError::Transport("offline".to_string())));
            }
            Ok(WishListing {
                wishes: self.wishes.lock().unwrap().clone(),
                reported_total: None,
            })
        }

        async fn add_wish(&self, new_wish: NewWish) -> Result<Value> {
            let mut wishes = self.wishes.lock().unwrap();
            let id = wishes.len() as EntityId + 1;
            wishes.push(Wish {
                id,
                user_id: Some(1),
                item_name: new_wish.item_name,
                estimated_cost: new_wish.estimated_cost,
                priority: new_wish.priority,
                target_date: new_wish.target_date,
                status: new_wish.status,
                created_at: None,
                updated_at: None,
            });
            Ok(json!({ "WishID": id }))
        }

        async fn mark_wish_completed(&self, wish_id: EntityId) -> Result<Value> {
            let mut wishes = self.wishes.lock().unwrap();
            let wish = wishes
                .iter_mut()
                .find(|w| w.id == wish_id)
                .ok_or_else(|| Error::Api(ApiError::Status {
                    status: 404,
                    body: "not found".to_string(),
                }))?;
            wish.status = RecordStatus::Inactive;
            Ok(json!({ "StatusCode": 200 }))
        }
    }

    fn ctx() -> ValidationContext {
        ValidationContext::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    fn draft(name: &str, cost: &str) -> WishDraft {
        WishDraft {
            item_name: name.to_string(),
            estimated_cost: cost.to_string(),
            ..WishDraft::default()
        }
    }

    fn service(api: &MockWishApi, notifier: &RecordingNotifier) -> WishService {
        WishService::new(Arc::new(api.clone()), Arc::new(notifier.clone()))
    }

    #[tokio::test]
    async fn test_completed_wish_moves_to_completed_list() {
        let api = MockWishApi::default();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        service
            .add_wish(&mut FormState::create(draft("Headphones", "120")), &ctx())
            .await
            .unwrap();
        service
            .add_wish(&mut FormState::create(draft("Book", "15.5")), &ctx())
            .await
            .unwrap();

        let before = service.load_wishes().await.unwrap();
        assert_eq!(before.active.len(), 2);
        assert_eq!(before.total_estimated_cost, dec!(135.5));
        assert_eq!(before.active[0].priority, Priority::Medium);

        service.complete(&before.active[0]).await.unwrap();
        let after = service.load_wishes().await.unwrap();

        assert_eq!(after.active.len(), 1);
        assert_eq!(after.completed.len(), 1);
        assert_eq!(after.completed[0].item_name, "Headphones");
        assert_eq!(after.total_estimated_cost, dec!(15.5));
        assert_eq!(
            notifier.last(),
            Some(Notification::Success("Wish marked as completed!".to_string()))
        );
    }

    #[tokio::test]
    async fn test_deactivate_uses_same_transition() {
        let api = MockWishApi::default();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        service
            .add_wish(&mut FormState::create(draft("Lamp", "0")), &ctx())
            .await
            .unwrap();
        let wish = service.load_wishes().await.unwrap().active.remove(0);
        service.deactivate(&wish).await.unwrap();

        let after = service.load_wishes().await.unwrap();
        assert!(after.active.is_empty());
        assert_eq!(after.completed[0].id, wish.id);
        assert_eq!(after.total_estimated_cost, Decimal::ZERO);
        assert_eq!(
            notifier.last(),
            Some(Notification::Success("Wish deleted successfully!".to_string()))
        );
    }

    #[tokio::test]
    async fn test_invalid_cost_is_rejected_locally() {
        let api = MockWishApi::default();
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        let mut form = FormState::create(draft("", "-3"));
        let err = service.add_wish(&mut form, &ctx()).await.unwrap_err();
        let fields = err.field_errors().unwrap();
        assert_eq!(fields.get("name"), Some("Item name is required."));
        assert_eq!(fields.get("cost"), Some("Estimated cost cannot be negative."));
        assert!(api.wishes.lock().unwrap().is_empty());
        assert!(form.is_open());
    }

    #[tokio::test]
    async fn test_load_failure_notifies() {
        let api = MockWishApi {
            offline: true,
            ..MockWishApi::default()
        };
        let notifier = RecordingNotifier::new();
        let service = service(&api, &notifier);

        assert!(service.load_wishes().await.is_err());
        assert_eq!(
            notifier.all(),
            vec![Notification::Error("Failed to fetch wishes".to_string())]
        );
    }
}
