//! Forms module - draft state, validation plumbing and the submit flow.

mod forms_controller;
mod forms_model;
pub mod forms_rules;


pub use forms_controller::{
    run_action, submit_form, LogNotifier, Notification, Notifier, SubmitMessages,
    CORRECT_ERRORS_MESSAGE,
};
pub use forms_model::{Draft, FieldErrors, FormMode, FormState, ValidationContext};

#[cfg(test)]
pub(crate) use forms_controller::testing;
