use std::future::Future;

use log::{error, info, warn};

use super::forms_model::{Draft, FormMode, FormState, ValidationContext};
use crate::errors::{Error, Result};

/// Message shown when submission is blocked by field errors.
pub const CORRECT_ERRORS_MESSAGE: &str = "Please correct the highlighted errors.";

/// User-facing toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Warning(String),
    Error(String),
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Notifier that only writes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::Success(m) => info!("{}", m),
            Notification::Warning(m) => warn!("{}", m),
            Notification::Error(m) => error!("{}", m),
        }
    }
}

/// Notification texts of one submit flow.
#[derive(Debug, Clone, Copy)]
pub struct SubmitMessages {
    pub success: &'static str,
    pub failure: &'static str,
}

/// Runs the common submit flow of an add/edit dialog.
///
/// Validates the draft, performs `action` (exactly one backend write), then
/// notifies and either resets the form or leaves it open for a retry. The
/// caller reloads its list once this returns `Ok`.
pub async fn submit_form<D, T, F, Fut>(
    form: &mut FormState<D>,
    ctx: &ValidationContext,
    notifier: &dyn Notifier,
    messages: SubmitMessages,
    action: F,
) -> Result<T>
where
    D: Draft,
    F: FnOnce(FormMode, D) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let draft = match form.begin_submit(ctx) {
        Ok(draft) => draft,
        Err(e @ Error::Validation(_)) => {
            notifier.notify(Notification::Error(CORRECT_ERRORS_MESSAGE.to_string()));
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    match action(form.mode(), draft).await {
        Ok(value) => {
            notifier.notify(Notification::Success(messages.success.to_string()));
            form.complete_success();
            Ok(value)
        }
        Err(e) => {
            error!("{}: {}", messages.failure, e);
            notifier.notify(Notification::Error(messages.failure.to_string()));
            form.complete_failure();
            Err(e)
        }
    }
}

/// Runs a one-shot action that has no form (delete, complete, ...).
pub async fn run_action<T, Fut>(
    notifier: &dyn Notifier,
    messages: SubmitMessages,
    action: Fut,
) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    match action.await {
        Ok(value) => {
            notifier.notify(Notification::Success(messages.success.to_string()));
            Ok(value)
        }
        Err(e) => {
            error!("{}: {}", messages.failure, e);
            notifier.notify(Notification::Error(messages.failure.to_string()));
            Err(e)
        }
    }
}
