//! Application state management module.
//!
//! This module contains the state of the terminal application, including:
//! - Main `State` struct holding both example forms and the log buffer
//! - Navigation types (View)
//! - Per-form pane state (focused field, submission status)
//! - State error handling

mod error;
mod form;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use form::{FormPane, SubmitStatus};
pub use navigation::View;
pub use state_impl::State;
