//! Per-field validation state.

use super::FieldValue;
use serde::Serialize;

/// Validation state of one form field.
///
/// `valid` always equals `error_message.is_none()` and `touched` never goes
/// back to false once set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldState {
    value: FieldValue,
    valid: bool,
    error_message: Option<String>,
    touched: bool,
}

/// Return a pristine field state holding the given value.
///
pub fn create_default(value: impl Into<FieldValue>) -> FieldState {
    FieldState::new(value)
}

impl FieldState {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        FieldState {
            value: value.into(),
            valid: true,
            error_message: None,
            touched: false,
        }
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Replace the value, leaving validity stale. Returns the new touched flag.
    ///
    pub(crate) fn replace_value(&mut self, value: FieldValue) -> bool {
        self.touched = self.touched || self.value != value;
        self.value = value;
        self.touched
    }

    /// Store the outcome of a validation run.
    ///
    pub(crate) fn record_validation(&mut self, error_message: Option<String>) {
        self.set_error_message(error_message);
        self.touched = true;
    }

    pub(crate) fn set_error_message(&mut self, error_message: Option<String>) {
        self.valid = error_message.is_none();
        self.error_message = error_message;
    }
}
