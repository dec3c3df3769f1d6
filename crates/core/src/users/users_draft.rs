use std::sync::LazyLock;

use regex::Regex;

use super::users_model::{Credentials, PasswordReset, Registration};
use crate::constants::{ALLOWED_EMAIL_DOMAINS, PASSWORD_MIN_LEN, PASSWORD_SPECIAL_CHARS};
use crate::forms::forms_rules::required;
use crate::forms::{Draft, ValidationContext};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("Invalid regex pattern")
});

static PASSWORD_CHARSET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9!@#$%^&*]+$").expect("Invalid regex pattern")
});

/// Message for an email that is missing, malformed or from another provider.
pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !EMAIL_REGEX.is_match(email) {
        return Some("Email is invalid".to_string());
    }
    let domain = email.rsplit('@').next().unwrap_or_default();
    if !ALLOWED_EMAIL_DOMAINS.contains(&domain) {
        return Some(format!(
            "Only emails from {} are allowed.",
            ALLOWED_EMAIL_DOMAINS.join(", ")
        ));
    }
    None
}

/// At least six characters from the allowed set, one of them special.
pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    let long_enough = password.chars().count() >= PASSWORD_MIN_LEN;
    let has_special = password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c));
    if !(long_enough && has_special && PASSWORD_CHARSET_REGEX.is_match(password)) {
        return Some(format!(
            "Password must be at least {} characters long and include a special character",
            PASSWORD_MIN_LEN
        ));
    }
    None
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn to_credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl Draft for LoginDraft {
    const FIELDS: &'static [&'static str] = &["email", "password"];

    fn validate_field(&self, field: &str, _ctx: &ValidationContext) -> Option<String> {
        match field {
            "email" => validate_email(&self.email),
            "password" => validate_password(&self.password),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    pub fn to_registration(&self) -> Registration {
        Registration {
            user_name: self.user_name.trim().to_string(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl Draft for RegistrationDraft {
    const FIELDS: &'static [&'static str] = &["name", "email", "password", "confirm"];

    fn validate_field(&self, field: &str, _ctx: &ValidationContext) -> Option<String> {
        match field {
            "name" => required(&self.user_name, "Name"),
            "email" => validate_email(&self.email),
            "password" => validate_password(&self.password),
            "confirm" if self.confirm_password != self.password => {
                Some("Passwords do not match".to_string())
            }
            _ => None,
        }
    }
}

/// New-password form reached through the emailed reset link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordResetDraft {
    pub token: String,
    pub password: String,
}

impl PasswordResetDraft {
    pub fn to_reset(&self) -> PasswordReset {
        PasswordReset {
            reset_password_token: self.token.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

impl Draft for PasswordResetDraft {
    const FIELDS: &'static [&'static str] = &["token", "password"];

    fn validate_field(&self, field: &str, _ctx: &ValidationContext) -> Option<String> {
        match field {
            "token" => required(&self.token, "Reset token"),
            "password" => validate_password(&self.password),
            _ => None,
        }
    }
}
