//! Session module - the logged-in user and where it is kept.

mod session_model;
mod session_store;
mod session_traits;

pub use session_model::Session;
pub use session_store::InMemorySessionStore;
pub use session_traits::SessionStore;
