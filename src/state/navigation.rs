//! Navigation-related state types.

use crate::forms::FormKind;

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    SimpleForm,
    ComplexForm,
}

impl View {
    /// Return the form shown by this view.
    ///
    pub fn form_kind(&self) -> FormKind {
        match self {
            View::SimpleForm => FormKind::Simple,
            View::ComplexForm => FormKind::Complex,
        }
    }

    /// Return the view after this one, wrapping around.
    ///
    pub fn next(&self) -> View {
        match self {
            View::SimpleForm => View::ComplexForm,
            View::ComplexForm => View::SimpleForm,
        }
    }
}

impl From<FormKind> for View {
    fn from(kind: FormKind) -> Self {
        match kind {
            FormKind::Simple => View::SimpleForm,
            FormKind::Complex => View::ComplexForm,
        }
    }
}
