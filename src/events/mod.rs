//! Event handling module.
//!
//! This module contains the terminal event handler, which polls user input on
//! a separate thread and applies key presses to the application state.

pub mod terminal;
