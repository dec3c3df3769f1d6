//! Wishes module - wish-list items, their form and services.

mod wishes_draft;
mod wishes_model;
mod wishes_service;
mod wishes_traits;

#[cfg(test)]
mod wishes_service_tests;

pub use wishes_draft::WishDraft;
pub use wishes_model::{NewWish, Priority, Wish, WishList, WishListing, WishRef};
pub use wishes_service::WishService;
pub use wishes_traits::{WishApiTrait, WishServiceTrait};
