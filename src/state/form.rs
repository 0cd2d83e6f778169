//! Form pane state types.
//!
//! A pane pairs one example form with the UI state around it: which field has
//! the cursor and how the last submission went.

use super::StateError;
use crate::field::Form;
use crate::forms::{FieldDescriptor, FormKind};

/// Outcome of the last submission shown under a form.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    NotSubmitted,
    Accepted,
    Rejected(Vec<String>), // Names of the invalid fields
}

/// One example form and its cursor.
///
#[derive(Debug)]
pub struct FormPane {
    kind: FormKind,
    form: Form,
    focused_field: usize,
    status: SubmitStatus,
}

impl FormPane {
    pub fn new(kind: FormKind) -> Self {
        Self::with_form(kind, kind.build())
    }

    /// Return a pane around an already built form of the given kind.
    ///
    pub fn with_form(kind: FormKind, form: Form) -> Self {
        FormPane {
            kind,
            form,
            focused_field: 0,
            status: SubmitStatus::NotSubmitted,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
    }

    pub fn focused_index(&self) -> usize {
        self.focused_field
    }

    /// Return the descriptor of the field with the cursor.
    ///
    pub fn focused_field(&self) -> Result<&'static FieldDescriptor, StateError> {
        self.kind
            .fields()
            .get(self.focused_field)
            .ok_or_else(|| StateError::FieldIndexOutOfRange {
                form: self.kind.title().to_string(),
                index: self.focused_field,
            })
    }

    pub fn focus_next(&mut self) {
        let count = self.kind.fields().len();
        self.focused_field = (self.focused_field + 1) % count;
    }

    pub fn focus_previous(&mut self) {
        let count = self.kind.fields().len();
        self.focused_field = (self.focused_field + count - 1) % count;
    }

    pub fn focus_first(&mut self) {
        self.focused_field = 0;
    }
}
