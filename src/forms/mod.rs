//! Example forms.
//!
//! Two forms built on the field state manager:
//! - `simple`: name and age, both required
//! - `complex`: name, age and birth date with cross-field rules

pub mod complex;
pub mod simple;

use crate::field::Form;
use serde::{Deserialize, Serialize};

pub const NAME: &str = "name";
pub const AGE: &str = "age";
pub const BIRTH_DATE: &str = "birth_date";

pub(crate) const MISSING_NAME: &str = "Missing name";
pub(crate) const MISSING_AGE: &str = "We need to know your age because ... we do";

/// Display metadata for one field.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
}

const SIMPLE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: NAME,
        label: "Name",
        placeholder: None,
    },
    FieldDescriptor {
        name: AGE,
        label: "Age",
        placeholder: None,
    },
];

const COMPLEX_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: NAME,
        label: "Name",
        placeholder: None,
    },
    FieldDescriptor {
        name: AGE,
        label: "Age",
        placeholder: None,
    },
    FieldDescriptor {
        name: BIRTH_DATE,
        label: "Birth date",
        placeholder: Some("yyyy-mm-dd"),
    },
];

/// Specifying the available example forms.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    #[default]
    Simple,
    Complex,
}

impl FormKind {
    pub fn all() -> [FormKind; 2] {
        [FormKind::Simple, FormKind::Complex]
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormKind::Simple => "Simple form",
            FormKind::Complex => "Complex form",
        }
    }

    pub fn fields(&self) -> &'static [FieldDescriptor] {
        match self {
            FormKind::Simple => SIMPLE_FIELDS,
            FormKind::Complex => COMPLEX_FIELDS,
        }
    }

    /// Build a fresh form of this kind.
    ///
    pub fn build(&self) -> Form {
        match self {
            FormKind::Simple => simple::simple_form(),
            FormKind::Complex => complex::complex_form(),
        }
    }

    /// Parse a form kind from its command line name.
    ///
    pub fn from_name(name: &str) -> Option<FormKind> {
        match name.trim().to_lowercase().as_str() {
            "simple" => Some(FormKind::Simple),
            "complex" => Some(FormKind::Complex),
            _ => None,
        }
    }
}
