//! User account models and the login response contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{ApiError, Error, Result};
use crate::models::{UserId, WireRecord};
use crate::session::Session;
use crate::utils::wire::{de_id, de_opt_string, Spellings};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const BAD_CREDENTIALS_MESSAGE: &str = "Email or password incorrect";
pub const UNKNOWN_EMAIL_MESSAGE: &str = "Email is incorrect";

/// Body of User/Login.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of User/Register.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Registration {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Body of User/ForgotPassword.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Body of User/ResetPassword.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PasswordReset {
    pub reset_password_token: String,
    pub password: String,
}

/// User record embedded in a successful login response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginResult {
    #[serde(rename = "UserID", alias = "userId", default, deserialize_with = "de_id")]
    pub user_id: UserId,
    #[serde(
        rename = "UserName",
        alias = "userName",
        alias = "Name",
        default,
        deserialize_with = "de_opt_string"
    )]
    pub user_name: Option<String>,
}

impl LoginResult {
    pub fn into_session(self) -> Session {
        Session::new(self.user_id, self.user_name)
    }
}

fn status_code_of(body: &Value) -> Option<i64> {
    match body.get("StatusCode").or_else(|| body.get("statusCode"))? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Interprets the body of a login call that returned HTTP success.
///
/// The body carries its own `StatusCode`; only `success_code` counts as a
/// login, and then `Result` holds the user record as a JSON string (or, from
/// newer backends, as an object).
pub fn parse_login_body(body: &Value, success_code: u16) -> Result<LoginResult> {
    if status_code_of(body) != Some(i64::from(success_code)) {
        return Err(Error::InvalidCredentials(LOGIN_FAILED_MESSAGE.to_string()));
    }
    let embedded = body
        .get("Result")
        .or_else(|| body.get("result"))
        .ok_or_else(|| ApiError::UnexpectedShape("login response has no Result".to_string()))?;
    let result: LoginResult = match embedded {
        Value::String(raw) => LoginResult::from_wire(serde_json::from_str(raw)?)?,
        other => LoginResult::from_wire(other.clone())?,
    };
    if result.user_id <= 0 {
        return Err(ApiError::UnexpectedShape("login response has no UserID".to_string()).into());
    }
    Ok(result)
}

impl WireRecord for LoginResult {
    const SPELLINGS: Spellings = &[&["UserID", "userId"], &["UserName", "userName", "Name"]];
}
