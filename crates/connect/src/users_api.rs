use async_trait::async_trait;
use log::{error, info, warn};
use serde::Serialize;
use serde_json::Value;

use fintrack_core::errors::{Error, Result};
use fintrack_core::users::{
    parse_login_body, Credentials, LoginResult, PasswordReset, PasswordResetRequest,
    Registration, UserApiTrait, BAD_CREDENTIALS_MESSAGE, UNKNOWN_EMAIL_MESSAGE,
};

use crate::client::FintrackApiClient;
use crate::transport::ApiRequest;

/// HTTP status the backend uses for unknown credentials or emails.
const REJECTED_STATUS: u16 = 400;

impl FintrackApiClient {
    /// POST an account call. These run before a session exists, so no `UserID` is added.
    ///
    /// With a `rejected_message`, a 400 answer becomes `InvalidCredentials`;
    /// without one it is returned as a status error.
    async fn post_account<P: Serialize>(
        &self,
        path: &str,
        payload: &P,
        rejected_message: Option<&str>,
    ) -> Result<Value> {
        let request = ApiRequest::post(path, serde_json::to_value(payload)?);
        let response = self.send(request).await?;
        if let Some(message) = rejected_message.filter(|_| response.status == REJECTED_STATUS) {
            warn!("[FintrackApi] POST {} rejected: {}", path, message);
            return Err(Error::InvalidCredentials(message.to_string()));
        }
        Self::parse_response(response).map_err(|e| {
            error!("[FintrackApi] POST {} failed: {}", path, e);
            e
        })
    }
}

#[async_trait]
impl UserApiTrait for FintrackApiClient {
    async fn login(&self, credentials: Credentials) -> Result<LoginResult> {
        let body = self
            .post_account("/User/Login", &credentials, Some(BAD_CREDENTIALS_MESSAGE))
            .await?;
        let result = parse_login_body(&body, self.config().login_success_code)?;
        info!("[FintrackApi] Logged in as user {}", result.user_id);
        Ok(result)
    }

    async fn register(&self, registration: Registration) -> Result<Value> {
        self.post_account("/User/Register", &registration, None)
            .await
    }

    async fn forgot_password(&self, email: &str) -> Result<Value> {
        let request = PasswordResetRequest {
            email: email.to_string(),
        };
        self.post_account("/User/ForgotPassword", &request, Some(UNKNOWN_EMAIL_MESSAGE))
            .await
    }

    async fn reset_password(&self, reset: PasswordReset) -> Result<Value> {
        self.post_account("/User/ResetPassword", &reset, None)
            .await
    }
}
