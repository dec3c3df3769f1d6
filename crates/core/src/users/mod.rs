//! Users module - credentials, account flows and the login contract.

mod users_draft;
mod users_model;
mod users_service;
mod users_traits;


pub use users_draft::{
    validate_email, validate_password, LoginDraft, PasswordResetDraft, RegistrationDraft,
};
pub use users_model::{
    parse_login_body, Credentials, LoginResult, PasswordReset, PasswordResetRequest,
    Registration, BAD_CREDENTIALS_MESSAGE, LOGIN_FAILED_MESSAGE, UNKNOWN_EMAIL_MESSAGE,
};
pub use users_service::UserService;
pub use users_traits::{UserApiTrait, UserServiceTrait};
