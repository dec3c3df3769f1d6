use serde::{Deserialize, Serialize};

use crate::models::UserId;

/// The logged-in user, as returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: Option<String>,
}

impl Session {
    pub fn new(user_id: UserId, user_name: Option<String>) -> Self {
        Self { user_id, user_name }
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Guest")
    }
}
