use async_trait::async_trait;
use serde_json::Value;

use super::wishes_draft::WishDraft;
use super::wishes_model::{NewWish, Wish, WishList, WishListing};
use crate::errors::Result;
use crate::forms::{FormState, ValidationContext};
use crate::models::EntityId;

/// Remote operations on the `/WishList` resource.
#[async_trait]
pub trait WishApiTrait: Send + Sync {
    async fn get_wishes(&self) -> Result<WishListing>;
    async fn add_wish(&self, new_wish: NewWish) -> Result<Value>;
    /// Sets the wish's status to inactive; used for both completion and deletion.
    async fn mark_wish_completed(&self, wish_id: EntityId) -> Result<Value>;
}

/// Trait for wish list service operations
#[async_trait]
pub trait WishServiceTrait: Send + Sync {
    async fn load_wishes(&self) -> Result<WishList>;
    async fn add_wish(
        &self,
        form: &mut FormState<WishDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value>;
    async fn complete(&self, wish: &Wish) -> Result<Value>;
    /// Soft delete; the same transition as `complete`, notified differently.
    async fn deactivate(&self, wish: &Wish) -> Result<Value>;
}
