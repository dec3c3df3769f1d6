use super::session_model::Session;
use crate::errors::{Error, Result};
use crate::models::UserId;

/// Persistence of the current session.
///
/// The data-access client receives a store explicitly and reads the user id
/// from it on every call; nothing reads ambient global state.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;

    /// User id of the current session, or `NotAuthenticated`.
    fn require_user_id(&self) -> Result<UserId> {
        self.load()?
            .map(|s| s.user_id)
            .ok_or(Error::NotAuthenticated)
    }
}
