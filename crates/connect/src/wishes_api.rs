use async_trait::async_trait;
use log::info;
use serde_json::Value;

use fintrack_core::errors::Result;
use fintrack_core::models::EntityId;
use fintrack_core::wishes::{NewWish, WishApiTrait, WishListing, WishRef};

use crate::client::FintrackApiClient;
use crate::envelope::decode_wish_listing;
use crate::transport::ApiRequest;

#[async_trait]
impl WishApiTrait for FintrackApiClient {
    async fn get_wishes(&self) -> Result<WishListing> {
        let request = ApiRequest::get("/WishList/GetAllWishes").query("userId", self.user_id()?);
        let body = self.execute(request).await?;
        let listing = decode_wish_listing(body, self.config().shape_policy)?;
        info!("[FintrackApi] Fetched {} wishes", listing.wishes.len());
        Ok(listing)
    }

    async fn add_wish(&self, new_wish: NewWish) -> Result<Value> {
        self.post("/WishList/AddWish", &new_wish).await
    }

    async fn mark_wish_completed(&self, wish_id: EntityId) -> Result<Value> {
        self.post("/WishList/MarkWishCompleted", &WishRef { id: wish_id })
            .await
    }
}
