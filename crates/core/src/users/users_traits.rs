use async_trait::async_trait;
use serde_json::Value;

use super::users_draft::{LoginDraft, PasswordResetDraft, RegistrationDraft};
use super::users_model::{Credentials, LoginResult, PasswordReset, Registration};
use crate::errors::Result;
use crate::forms::{FormState, ValidationContext};
use crate::session::Session;

/// Remote operations on the `/User` resource. None of them needs a session.
#[async_trait]
pub trait UserApiTrait: Send + Sync {
    /// Fails with `InvalidCredentials` on HTTP 400 or a non-success body code.
    async fn login(&self, credentials: Credentials) -> Result<LoginResult>;
    async fn register(&self, registration: Registration) -> Result<Value>;
    async fn forgot_password(&self, email: &str) -> Result<Value>;
    async fn reset_password(&self, reset: PasswordReset) -> Result<Value>;
}

/// Trait for account and session operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn login(
        &self,
        form: &mut FormState<LoginDraft>,
        ctx: &ValidationContext,
    ) -> Result<Session>;
    async fn register(
        &self,
        form: &mut FormState<RegistrationDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value>;
    async fn forgot_password(&self, email: &str) -> Result<Value>;
    async fn reset_password(
        &self,
        form: &mut FormState<PasswordResetDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value>;
    fn logout(&self) -> Result<()>;
    fn current_session(&self) -> Result<Option<Session>>;
}
