use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use serde_json::Value;

use super::users_draft::{validate_email, LoginDraft, PasswordResetDraft, RegistrationDraft};
use super::users_traits::{UserApiTrait, UserServiceTrait};
use crate::errors::Result;
use crate::forms::{
    run_action, submit_form, FieldErrors, FormState, Notification, Notifier, SubmitMessages,
    ValidationContext,
};
use crate::session::{Session, SessionStore};

const LOGIN_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Login Successful!",
    failure: "Login failed! Please check your credentials.",
};

const REGISTER_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Registration successful!",
    failure: "Registration failed!",
};

const FORGOT_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Password reset email sent!",
    failure: "Failed to send password reset email",
};

const RESET_MESSAGES: SubmitMessages = SubmitMessages {
    success: "Password has been reset!",
    failure: "Failed to reset password",
};

/// Login, registration and password recovery; owns the session lifecycle.
pub struct UserService {
    api: Arc<dyn UserApiTrait>,
    sessions: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
}

impl UserService {
    pub fn new(
        api: Arc<dyn UserApiTrait>,
        sessions: Arc<dyn SessionStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            api,
            sessions,
            notifier,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn login(
        &self,
        form: &mut FormState<LoginDraft>,
        ctx: &ValidationContext,
    ) -> Result<Session> {
        let api = self.api.clone();
        let sessions = self.sessions.clone();
        let session = submit_form(
            form,
            ctx,
            self.notifier.as_ref(),
            LOGIN_MESSAGES,
            |_mode, draft| async move {
                let session = api.login(draft.to_credentials()).await?.into_session();
                sessions.save(&session)?;
                Ok(session)
            },
        )
        .await?;
        info!("Logged in as user {}", session.user_id);
        Ok(session)
    }

    async fn register(
        &self,
        form: &mut FormState<RegistrationDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value> {
        let api = self.api.clone();
        submit_form(
            form,
            ctx,
            self.notifier.as_ref(),
            REGISTER_MESSAGES,
            |_mode, draft| async move { api.register(draft.to_registration()).await },
        )
        .await
    }

    async fn forgot_password(&self, email: &str) -> Result<Value> {
        if let Some(message) = validate_email(email) {
            self.notifier.notify(Notification::Warning(message.clone()));
            let mut errors = FieldErrors::new();
            errors.insert("email", message);
            return Err(errors.into());
        }
        run_action(
            self.notifier.as_ref(),
            FORGOT_MESSAGES,
            self.api.forgot_password(email),
        )
        .await
    }

    async fn reset_password(
        &self,
        form: &mut FormState<PasswordResetDraft>,
        ctx: &ValidationContext,
    ) -> Result<Value> {
        let api = self.api.clone();
        submit_form(
            form,
            ctx,
            self.notifier.as_ref(),
            RESET_MESSAGES,
            |_mode, draft| async move { api.reset_password(draft.to_reset()).await },
        )
        .await
    }

    fn logout(&self) -> Result<()> {
        match self.sessions.load()? {
            Some(session) => info!("Logging out user {}", session.user_id),
            None => warn!("Logout requested without an active session"),
        }
        self.sessions.clear()
    }

    fn current_session(&self) -> Result<Option<Session>> {
        self.sessions.load()
    }
}
