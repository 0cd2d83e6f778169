//! Field state management.
//!
//! This module holds the validation state of form fields, independent of any
//! user interface:
//! - `FieldState` records value, validity, error message and touched flag
//! - `Form` owns the fields of one form and runs their rules
//! - `FormError` reports programmer errors such as a mistyped field name

mod error;
mod form;
mod state;
mod value;

pub use error::{FormError, FormResult};
pub use form::{Form, Hook, Rule, SubmitOutcome, ValidationContext};
pub use state::{create_default, FieldState};
pub use value::FieldValue;
