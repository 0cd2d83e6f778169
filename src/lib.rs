//! Per-field form validation state and a terminal demo of two forms.
//!
//! The `field` module is the reusable part: a `Form` owns named fields, each
//! with a value, validity, error message and touched flag, and runs the rule
//! functions attached to them. The remaining modules host the example forms
//! in a terminal user interface.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod field;
pub mod forms;
pub mod logger;
pub mod state;
pub mod ui;
