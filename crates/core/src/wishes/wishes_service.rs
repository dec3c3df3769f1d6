use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use serde_json::Value;

use super::wishes_draft::WishDraft;
use super::wishes_model::{Wish, WishList};
use super::wishes_traits::{WishApiTrait, WishServiceTrait};
use crate::errors::Result;
use crate::forms::{
    run_action, submit_form, FormState, Notification, Notifier, SubmitMessages,
    ValidationContext,
};

const ADD_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Wish added successfully!",
    failure: "Failed to add wish",
};

const COMPLETE_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Wish marked as completed!",
    failure: "Failed to mark wish as completed",
};

const DELETE_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Wish deleted successfully!",
    failure: "Failed to delete wish",
};

/// Controller for the wish list page.
pub struct WishService {
    api: Arc<dyn WishApiTrait>,
    notifier: Arc<dyn Notifier>,
}

impl WishService {
    pub fn new(api: Arc<dyn WishApiTrait>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }
}

#[async_trait]
impl WishServiceTrait for WishService {
    async fn load_wishes(&self) -> Result<WishList> {
        match self.api.get_wishes().await {
            Ok(listing) => {
                let list = WishList::from_listing(listing);
                debug!(
                    "Loaded {} active and {} completed wishes",
                    list.active.len(),
                    list.completed.len()
                );
                Ok(list)
            }
            Err(e) => {
                error!("Error fetching wishes: {}", e);
                self.notifier
                    .notify(Notification::Error("Failed to fetch wishes".to_string()));
                Err(e)
            }
        }
    }

    async fn add_wish(
        &self,
        form: &mut FormState<WishDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value> {
        let api = self.api.clone();
        submit_form(
            form,
            ctx,
            self.notifier.as_ref(),
            ADD_MESSAGES,
            |_mode, draft| async move { api.add_wish(draft.to_new()?).await },
        )
        .await
    }

    async fn complete(&self, wish: &Wish) -> Result<Value> {
        run_action(
            self.notifier.as_ref(),
            COMPLETE_MESSAGES,
            self.api.mark_wish_completed(wish.id),
        )
        .await
    }

    async fn deactivate(&self, wish: &Wish) -> Result<Value> {
        run_action(
            self.notifier.as_ref(),
            DELETE_MESSAGES,
            self.api.mark_wish_completed(wish.id),
        )
        .await
    }
}
