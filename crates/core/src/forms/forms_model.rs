//! Form state shared by every add/edit dialog.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::errors::{Error, Result};
use crate::models::EntityId;
use crate::utils::time_utils::local_today;

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Facts validation depends on that are not part of the draft itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Context for the user's current local date.
    pub fn now() -> Self {
        Self::new(local_today())
    }
}

/// Editable field set of one entity.
pub trait Draft: Clone + Default + Send {
    /// Field names, in the order errors are reported.
    const FIELDS: &'static [&'static str];

    /// Validates one field, returning the message to show next to it.
    fn validate_field(&self, field: &str, ctx: &ValidationContext) -> Option<String>;

    /// Validates every field.
    fn validate(&self, ctx: &ValidationContext) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in Self::FIELDS {
            if let Some(message) = self.validate_field(field, ctx) {
                errors.insert(field, message);
            }
        }
        errors
    }
}

/// Whether a form creates a new record or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

/// Local state of an add/edit dialog.
#[derive(Debug, Clone)]
pub struct FormState<D: Draft> {
    mode: FormMode,
    draft: D,
    defaults: D,
    errors: FieldErrors,
    pending: bool,
    open: bool,
}

impl<D: Draft> FormState<D> {
    /// Opens an empty form pre-filled with `defaults`.
    pub fn create(defaults: D) -> Self {
        Self {
            mode: FormMode::Create,
            draft: defaults.clone(),
            defaults,
            errors: FieldErrors::new(),
            pending: false,
            open: true,
        }
    }

    /// Opens a form pre-populated from an existing record.
    pub fn edit(id: EntityId, draft: D, defaults: D) -> Self {
        Self {
            mode: FormMode::Edit(id),
            draft,
            defaults,
            errors: FieldErrors::new(),
            pending: false,
            open: true,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Applies a change to one field and re-validates that field only.
    pub fn set_field<F>(&mut self, field: &'static str, ctx: &ValidationContext, apply: F)
    where
        F: FnOnce(&mut D),
    {
        apply(&mut self.draft);
        match self.draft.validate_field(field, ctx) {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(field),
        }
    }

    /// Validates the whole draft and marks the form pending.
    ///
    /// Fails with `Busy` while a previous submission is in flight, and with the
    /// collected field errors when any field is invalid.
    pub fn begin_submit(&mut self, ctx: &ValidationContext) -> Result<D> {
        if self.pending {
            return Err(Error::Busy);
        }
        self.errors = self.draft.validate(ctx);
        if !self.errors.is_empty() {
            return Err(self.errors.clone().into());
        }
        self.pending = true;
        Ok(self.draft.clone())
    }

    /// Server confirmed the write: reset the draft and close.
    pub fn complete_success(&mut self) {
        self.pending = false;
        self.draft = self.defaults.clone();
        self.errors = FieldErrors::new();
        self.open = false;
    }

    /// Server rejected the write: stay open with the draft untouched.
    pub fn complete_failure(&mut self) {
        self.pending = false;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
